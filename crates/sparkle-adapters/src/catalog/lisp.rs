// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common Lisp, Crystal and D generators.

use sparkle_core::Language;
use sparkle_skill::{ParamKind, ParamSpec, ToolSpec};

use crate::spec::{AdapterSpec, version_tool};

pub static COLESLAW: AdapterSpec = AdapterSpec {
    key: "coleslaw",
    name: "Coleslaw",
    language: Language::CommonLisp,
    binary: "coleslaw",
    description: "Flexible blog engine for Common Lisp with pluggable themes and deployment",
    version: version_tool("coleslaw_version", "Get Coleslaw version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "coleslaw_setup",
            description: "Write a starter .coleslawrc for a site",
            command: &["setup"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "coleslaw_new",
            description: "Create a new post",
            command: &["new"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::positional("type", ParamKind::Text, "Content type, e.g. post", "content type"),
            ],
        },
        ToolSpec {
            name: "coleslaw_generate",
            description: "Generate the site",
            command: &["generate"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "coleslaw_preview",
            description: "Preview the site locally",
            command: &["preview"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "coleslaw_deploy",
            description: "Generate and deploy the site",
            command: &["deploy"],
            params: &[ParamSpec::site_root()],
        },
    ],
};

pub static MARMOT: AdapterSpec = AdapterSpec {
    key: "marmot",
    name: "Marmot",
    language: Language::Crystal,
    binary: "marmot",
    description: "Static site generator written in Crystal",
    version: version_tool("marmot_version", "Get Marmot version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "marmot_init",
            description: "Initialize a new Marmot site",
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
            name: "marmot_build",
            description: "Build the Marmot site",
            command: &["build"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "marmot_serve",
            description: "Start the development server",
            command: &["serve"],
            params: &[ParamSpec::site_root(), ParamSpec::port("--port")],
        },
    ],
};

pub static REGGAE: AdapterSpec = AdapterSpec {
    key: "reggae",
    name: "Reggae",
    language: Language::D,
    binary: "reggae",
    description: "Meta build system in D that generates backend builds for site pipelines",
    version: version_tool("reggae_version", "Get Reggae version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "reggae_generate",
            description: "Generate build files from reggaefile.d",
            command: &[],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::option(
                    "backend",
                    ParamKind::Text,
                    "-b",
                    "Backend: ninja, make, tup or binary",
                    "backend",
                ),
            ],
        },
        ToolSpec {
            name: "reggae_build",
            description: "Generate and run the binary backend",
            command: &["-b", "binary"],
            params: &[ParamSpec::site_root()],
        },
    ],
};
