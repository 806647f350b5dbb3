// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ML-family generators: Fornax (F#), Ema and Hakyll (Haskell), YOCaml (OCaml).

use sparkle_core::Language;
use sparkle_skill::{ParamKind, ParamSpec, ToolSpec};

use crate::spec::{AdapterSpec, version_tool};

pub static FORNAX: AdapterSpec = AdapterSpec {
    key: "fornax",
    name: "Fornax",
    language: Language::FSharp,
    binary: "fornax",
    description: "Scriptable static site generator using type-safe F# DSL templates",
    version: version_tool("fornax_version", "Get Fornax version", &["version"]),
    tools: &[
        ToolSpec {
            name: "fornax_new",
            description: "Create a new Fornax site in the working directory",
            command: &["new"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "fornax_build",
            description: "Build the site",
            command: &["build"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "fornax_watch",
            description: "Build, serve and rebuild on changes",
            command: &["watch"],
            params: &[ParamSpec::site_root(), ParamSpec::port("--port")],
        },
        ToolSpec {
            name: "fornax_clean",
            description: "Remove generated output",
            command: &["clean"],
            params: &[ParamSpec::site_root()],
        },
    ],
};

pub static EMA: AdapterSpec = AdapterSpec {
    key: "ema",
    name: "Ema",
    language: Language::Haskell,
    binary: "ema",
    description: "Haskell static site generator with hot reload of the rendered site",
    version: version_tool("ema_version", "Get Ema version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "ema_run",
            description: "Run the live development server",
            command: &["run"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::port("--port"),
                ParamSpec::interface("--host"),
            ],
        },
        ToolSpec {
            name: "ema_gen",
            description: "Generate the static site",
            command: &["gen"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::positional("outputDir", ParamKind::Path, "Output directory", "output directory")
                    .required(),
            ],
        },
    ],
};

pub static HAKYLL: AdapterSpec = AdapterSpec {
    key: "hakyll",
    name: "Hakyll",
    language: Language::Haskell,
    binary: "site",
    description: "Haskell library for generating static sites, driven by the compiled site executable",
    version: version_tool("hakyll_version", "Get site executable version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "hakyll_build",
            description: "Build the site",
            command: &["build"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "hakyll_rebuild",
            description: "Clean and build again",
            command: &["rebuild"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "hakyll_clean",
            description: "Remove generated files and cache",
            command: &["clean"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "hakyll_watch",
            description: "Autocompile on changes and serve the site",
            command: &["watch"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::port("--port"),
                ParamSpec::interface("--host"),
            ],
        },
        ToolSpec {
            name: "hakyll_check",
            description: "Validate the site output for broken links",
            command: &["check"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::switch("internalLinks", "--internal-links", "Check internal links only"),
            ],
        },
    ],
};

pub static YOCAML: AdapterSpec = AdapterSpec {
    key: "yocaml",
    name: "YOCaml",
    language: Language::OCaml,
    binary: "dune",
    description: "OCaml static site generator framework built with dune",
    version: version_tool("yocaml_version", "Get dune version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "yocaml_build",
            description: "Compile the site generator",
            command: &["build"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "yocaml_exec",
            description: "Run the compiled site generator",
            command: &["exec"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::positional("target", ParamKind::Text, "Executable name", "target")
                    .required(),
            ],
        },
        ToolSpec {
            name: "yocaml_clean",
            description: "Remove build artifacts",
            command: &["clean"],
            params: &[ParamSpec::site_root()],
        },
    ],
};
