// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! BEAM generators: NimblePublisher, Serum and Tableau (Elixir, via `mix`)
//! and Zotonic (Erlang).

use sparkle_core::Language;
use sparkle_skill::{ParamKind, ParamSpec, ToolSpec};

use crate::spec::{AdapterSpec, version_tool};

pub static NIMBLE_PUBLISHER: AdapterSpec = AdapterSpec {
    key: "nimblePublisher",
    name: "NimblePublisher",
    language: Language::Elixir,
    binary: "mix",
    description: "Minimal filesystem-based publishing engine compiled into an Elixir project",
    version: version_tool("nimble_publisher_version", "Get Mix version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "nimble_publisher_deps",
            description: "Fetch project dependencies",
            command: &["deps.get"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "nimble_publisher_compile",
            description: "Compile the project, rebuilding published content",
            command: &["compile"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::switch("force", "--force", "Recompile everything"),
            ],
        },
    ],
};

pub static SERUM: AdapterSpec = AdapterSpec {
    key: "serum",
    name: "Serum",
    language: Language::Elixir,
    binary: "mix",
    description: "Simple static website generator written in Elixir",
    version: version_tool("serum_version", "Get Mix version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "serum_new",
            description: "Create a new Serum project",
            command: &["serum.new"],
            params: &[ParamSpec::positional(
                "path",
                ParamKind::Path,
                "Path for the new project",
                "path",
            )
            .required()],
        },
        ToolSpec {
            name: "serum_build",
            description: "Build the website",
            command: &["serum.build"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::option(
                    "outputDir",
                    ParamKind::Path,
                    "--output",
                    "Output directory",
                    "output directory",
                ),
            ],
        },
        ToolSpec {
            name: "serum_server",
            description: "Start the development server",
            command: &["serum.server"],
            params: &[ParamSpec::site_root(), ParamSpec::port("--port")],
        },
    ],
};

pub static TABLEAU: AdapterSpec = AdapterSpec {
    key: "tableau",
    name: "Tableau",
    language: Language::Elixir,
    binary: "mix",
    description: "Static site generator for Elixir with extension-based pipelines",
    version: version_tool("tableau_version", "Get Mix version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "tableau_build",
            description: "Build the site",
            command: &["tableau.build"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::option(
                    "outputDir",
                    ParamKind::Path,
                    "--out",
                    "Output directory",
                    "output directory",
                ),
            ],
        },
        ToolSpec {
            name: "tableau_server",
            description: "Start the development server",
            command: &["tableau.server"],
            params: &[ParamSpec::site_root()],
        },
    ],
};

pub static ZOTONIC: AdapterSpec = AdapterSpec {
    key: "zotonic",
    name: "Zotonic",
    language: Language::Erlang,
    binary: "zotonic",
    description: "Erlang web framework and content management system",
    version: version_tool("zotonic_version", "Get Zotonic version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "zotonic_start",
            description: "Start Zotonic in the background",
            command: &["start"],
            params: &[],
        },
        ToolSpec {
            name: "zotonic_stop",
            description: "Stop the running Zotonic node",
            command: &["stop"],
            params: &[],
        },
        ToolSpec {
            name: "zotonic_status",
            description: "Report whether Zotonic is running",
            command: &["status"],
            params: &[],
        },
        ToolSpec {
            name: "zotonic_addsite",
            description: "Create a new site",
            command: &["addsite"],
            params: &[
                ParamSpec::option(
                    "skeleton",
                    ParamKind::Text,
                    "-s",
                    "Site skeleton, e.g. blog",
                    "skeleton",
                ),
                ParamSpec::positional("site", ParamKind::Text, "Site name", "site name").required(),
            ],
        },
    ],
};
