// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nim, Swift and Tcl generators: Nimrod, Publish and Wub.

use sparkle_core::Language;
use sparkle_skill::{ParamKind, ParamSpec, ToolSpec};

use crate::spec::{AdapterSpec, version_tool};

pub static NIMROD: AdapterSpec = AdapterSpec {
    key: "nimrod",
    name: "Nimrod",
    language: Language::Nim,
    binary: "nimrod",
    description: "Static site generator written in Nim",
    version: version_tool("nimrod_version", "Get Nimrod version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "nimrod_init",
            description: "Initialize a new site",
            command: &["init"],
            params: &[ParamSpec::positional(
                "path",
                ParamKind::Path,
                "Path for the new site",
                "path",
            )
            .required()],
        },
        ToolSpec {
            name: "nimrod_build",
            description: "Build the site",
            command: &["build"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "nimrod_serve",
            description: "Start the development server",
            command: &["serve"],
            params: &[ParamSpec::site_root(), ParamSpec::port("--port")],
        },
    ],
};

pub static PUBLISH: AdapterSpec = AdapterSpec {
    key: "publish",
    name: "Publish",
    language: Language::Swift,
    binary: "publish",
    description: "Static site generator for Swift developers with type-safe themes",
    version: version_tool("publish_version", "Get Publish version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "publish_new",
            description: "Create a new website package in the working directory",
            command: &["new"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "publish_generate",
            description: "Generate the website",
            command: &["generate"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "publish_run",
            description: "Generate and serve the website locally",
            command: &["run"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::positional("port", ParamKind::Port, "Port number", "port number"),
            ],
        },
        ToolSpec {
            name: "publish_deploy",
            description: "Generate and deploy the website",
            command: &["deploy"],
            params: &[ParamSpec::site_root()],
        },
    ],
};

/// `tclsh` has no version flag; with stdin closed, a bare run exits
/// immediately and only tells whether the interpreter is installed.
pub static WUB: AdapterSpec = AdapterSpec {
    key: "wub",
    name: "Wub",
    language: Language::Tcl,
    binary: "tclsh",
    description: "Pure-Tcl web server and site framework",
    version: version_tool("wub_version", "Check that tclsh is available", &[]),
    tools: &[ToolSpec {
        name: "wub_start",
        description: "Start a Wub server script",
        command: &[],
        params: &[
            ParamSpec::site_root(),
            ParamSpec::positional("script", ParamKind::Path, "Server script, e.g. Wub.tcl", "script")
                .required(),
        ],
    }],
};
