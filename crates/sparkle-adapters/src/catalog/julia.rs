// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Julia generators: Documenter, Franklin and StaticWebPages.
//!
//! All three run through `julia` with a build script from the project,
//! since inline `-e` expressions need characters the argument allow-list
//! rejects.

use sparkle_core::Language;
use sparkle_skill::{ParamKind, ParamSpec, ToolSpec};

use crate::spec::{AdapterSpec, version_tool};

const SCRIPT: ParamSpec =
    ParamSpec::positional("script", ParamKind::Path, "Julia script to run", "script").required();

pub static DOCUMENTER: AdapterSpec = AdapterSpec {
    key: "documenter",
    name: "Documenter",
    language: Language::Julia,
    binary: "julia",
    description: "Documentation generator for Julia packages",
    version: version_tool("documenter_version", "Get Julia version", &["--version"]),
    tools: &[ToolSpec {
        name: "documenter_build",
        description: "Build the documentation with docs/make.jl",
        command: &["--project=docs", "docs/make.jl"],
        params: &[ParamSpec::site_root()],
    }],
};

pub static FRANKLIN: AdapterSpec = AdapterSpec {
    key: "franklin",
    name: "Franklin",
    language: Language::Julia,
    binary: "julia",
    description: "Static site generator for technical blogging in Julia",
    version: version_tool("franklin_version", "Get Julia version", &["--version"]),
    tools: &[ToolSpec {
        name: "franklin_run",
        description: "Run a Franklin script such as serve.jl or optimize.jl",
        command: &["--project=."],
        params: &[ParamSpec::site_root(), SCRIPT],
    }],
};

pub static STATICWEBPAGES: AdapterSpec = AdapterSpec {
    key: "staticwebpages",
    name: "StaticWebPages",
    language: Language::Julia,
    binary: "julia",
    description: "Personal academic website generator for Julia",
    version: version_tool("staticwebpages_version", "Get Julia version", &["--version"]),
    tools: &[ToolSpec {
        name: "staticwebpages_run",
        description: "Run the site's generation script",
        command: &["--project=."],
        params: &[ParamSpec::site_root(), SCRIPT],
    }],
};
