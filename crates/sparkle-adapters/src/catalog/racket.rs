// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Racket generators: Frog and Pollen, both run as `raco` subcommands.

use sparkle_core::Language;
use sparkle_skill::{ParamKind, ParamSpec, ToolSpec};

use crate::spec::{AdapterSpec, version_tool};

pub static FROG: AdapterSpec = AdapterSpec {
    key: "frog",
    name: "Frog",
    language: Language::Racket,
    binary: "raco",
    description: "Static blog generator for Racket using Markdown and Bootstrap",
    version: version_tool("frog_version", "Get Frog version", &["frog", "--version"]),
    tools: &[
        ToolSpec {
            name: "frog_init",
            description: "Create a new Frog project in the working directory",
            command: &["frog", "--init"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "frog_new",
            description: "Create a new Markdown post",
            command: &["frog", "--new"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::positional("title", ParamKind::Text, "Post title", "title").required(),
            ],
        },
        ToolSpec {
            name: "frog_build",
            description: "Generate the blog",
            command: &["frog", "--build"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "frog_preview",
            description: "Build and serve the blog locally",
            command: &["frog", "--preview"],
            params: &[ParamSpec::site_root(), ParamSpec::port("--port")],
        },
        ToolSpec {
            name: "frog_clean",
            description: "Delete generated files",
            command: &["frog", "--clean"],
            params: &[ParamSpec::site_root()],
        },
    ],
};

pub static POLLEN: AdapterSpec = AdapterSpec {
    key: "pollen",
    name: "Pollen",
    language: Language::Racket,
    binary: "raco",
    description: "Publishing system for programmable books in Racket",
    version: version_tool("pollen_version", "Get Pollen version", &["pollen", "version"]),
    tools: &[
        ToolSpec {
            name: "pollen_start",
            description: "Start the project server",
            command: &["pollen", "start"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::positional("directory", ParamKind::Path, "Project directory", "directory"),
                ParamSpec::positional("port", ParamKind::Port, "Port number", "port number"),
            ],
        },
        ToolSpec {
            name: "pollen_render",
            description: "Render the project's source files",
            command: &["pollen", "render"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::switch("recursive", "-r", "Render subdirectories too"),
            ],
        },
        ToolSpec {
            name: "pollen_publish",
            description: "Copy the rendered project to a publish directory",
            command: &["pollen", "publish"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::positional("source", ParamKind::Path, "Project directory", "source directory"),
                ParamSpec::positional("destination", ParamKind::Path, "Publish directory", "destination"),
            ],
        },
        ToolSpec {
            name: "pollen_reset",
            description: "Clear the render cache",
            command: &["pollen", "reset"],
            params: &[ParamSpec::site_root()],
        },
    ],
};
