// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Kotlin and Scala generators: Orchid (Gradle), Laika and Scalatex (sbt).

use sparkle_core::Language;
use sparkle_skill::{ParamKind, ParamSpec, ToolSpec};

use crate::spec::{AdapterSpec, version_tool};

pub static ORCHID: AdapterSpec = AdapterSpec {
    key: "orchid",
    name: "Orchid",
    language: Language::Kotlin,
    binary: "gradle",
    description: "Kotlin documentation and static site generator driven by Gradle tasks",
    version: version_tool("orchid_version", "Get Gradle version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "orchid_build",
            description: "Build the Orchid site",
            command: &["orchidBuild"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "orchid_serve",
            description: "Build and serve the site locally",
            command: &["orchidServe"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "orchid_deploy",
            description: "Build and deploy the site",
            command: &["orchidDeploy"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::option(
                    "environment",
                    ParamKind::Text,
                    "-PorchidEnvironment",
                    "Environment name, e.g. prod",
                    "environment",
                ),
            ],
        },
    ],
};

pub static LAIKA: AdapterSpec = AdapterSpec {
    key: "laika",
    name: "Laika",
    language: Language::Scala,
    binary: "sbt",
    description: "Site and e-book generator for Scala with Markdown and reStructuredText input",
    version: version_tool("laika_version", "Get sbt version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "laika_site",
            description: "Generate the site with API docs",
            command: &["laikaSite"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "laika_html",
            description: "Render the HTML output only",
            command: &["laikaHTML"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "laika_preview",
            description: "Start the preview server",
            command: &["laikaPreview"],
            params: &[ParamSpec::site_root()],
        },
    ],
};

pub static SCALATEX: AdapterSpec = AdapterSpec {
    key: "scalatex",
    name: "Scalatex",
    language: Language::Scala,
    binary: "sbt",
    description: "Programmable document generator for Scala",
    version: version_tool("scalatex_version", "Get sbt version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "scalatex_compile",
            description: "Compile the documents",
            command: &["compile"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "scalatex_run",
            description: "Render the site",
            command: &["run"],
            params: &[ParamSpec::site_root()],
        },
    ],
};
