// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rust generators: Cobalt, mdBook and Zola.

use sparkle_core::Language;
use sparkle_skill::{ParamKind, ParamSpec, ToolSpec};

use crate::spec::{AdapterSpec, version_tool};

pub static COBALT: AdapterSpec = AdapterSpec {
    key: "cobalt",
    name: "Cobalt",
    language: Language::Rust,
    binary: "cobalt",
    description: "Straightforward static site generator written in Rust with Liquid templates",
    version: version_tool("cobalt_version", "Get Cobalt version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "cobalt_init",
            description: "Initialize a new Cobalt site",
            command: &["init"],
            params: &[ParamSpec::positional(
                "path",
                ParamKind::Path,
                "Directory for the new site",
                "path",
            )],
        },
        ToolSpec {
            name: "cobalt_build",
            description: "Build the Cobalt site",
            command: &["build"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::option(
                    "destination",
                    ParamKind::Path,
                    "--destination",
                    "Output directory",
                    "output directory",
                ),
                ParamSpec::drafts(),
            ],
        },
        ToolSpec {
            name: "cobalt_serve",
            description: "Start the Cobalt development server",
            command: &["serve"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::port("--port"),
                ParamSpec::interface("--host"),
                ParamSpec::drafts(),
            ],
        },
        ToolSpec {
            name: "cobalt_clean",
            description: "Remove the generated site",
            command: &["clean"],
            params: &[ParamSpec::site_root()],
        },
    ],
};

pub static MDBOOK: AdapterSpec = AdapterSpec {
    key: "mdbook",
    name: "mdBook",
    language: Language::Rust,
    binary: "mdbook",
    description: "Create books from Markdown files, as used for the Rust documentation",
    version: version_tool("mdbook_version", "Get mdBook version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "mdbook_init",
            description: "Create a new book",
            command: &["init"],
            params: &[
                ParamSpec::positional("path", ParamKind::Path, "Directory for the new book", "path")
                    .required(),
                ParamSpec::option("title", ParamKind::Text, "--title", "Book title", "title"),
                ParamSpec::switch("force", "--force", "Skip confirmation prompts"),
            ],
        },
        ToolSpec {
            name: "mdbook_build",
            description: "Build the book",
            command: &["build"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::option(
                    "destDir",
                    ParamKind::Path,
                    "--dest-dir",
                    "Output directory",
                    "output directory",
                ),
            ],
        },
        ToolSpec {
            name: "mdbook_serve",
            description: "Serve the book and rebuild on changes",
            command: &["serve"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::port("--port"),
                ParamSpec::interface("--hostname"),
                ParamSpec::switch("openBrowser", "--open", "Open browser automatically"),
            ],
        },
        ToolSpec {
            name: "mdbook_test",
            description: "Test the Rust code samples in the book",
            command: &["test"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "mdbook_clean",
            description: "Delete the built book",
            command: &["clean"],
            params: &[ParamSpec::site_root()],
        },
    ],
};

pub static ZOLA: AdapterSpec = AdapterSpec {
    key: "zola",
    name: "Zola",
    language: Language::Rust,
    binary: "zola",
    description: "Fast static site generator written in Rust with built-in Sass compilation and syntax highlighting",
    version: version_tool("zola_version", "Get Zola version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "zola_init",
            description: "Initialize a new Zola site",
            command: &["init"],
            params: &[
                ParamSpec::positional("path", ParamKind::Path, "Path for the new site", "path")
                    .required(),
                ParamSpec::switch("force", "--force", "Overwrite existing directory"),
            ],
        },
        ToolSpec {
            name: "zola_build",
            description: "Build the Zola site",
            command: &["build"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::option(
                    "baseUrl",
                    ParamKind::Url,
                    "--base-url",
                    "Base URL for the site",
                    "base URL",
                ),
                ParamSpec::option(
                    "outputDir",
                    ParamKind::Path,
                    "--output-dir",
                    "Output directory",
                    "output directory",
                ),
                ParamSpec::drafts(),
            ],
        },
        ToolSpec {
            name: "zola_serve",
            description: "Start Zola development server",
            command: &["serve"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::option(
                    "port",
                    ParamKind::Port,
                    "--port",
                    "Port number (default: 1111)",
                    "port number",
                ),
                ParamSpec::interface("--interface"),
                ParamSpec::drafts(),
                ParamSpec::switch("openBrowser", "--open", "Open browser automatically"),
            ],
        },
        ToolSpec {
            name: "zola_check",
            description: "Check the site for errors",
            command: &["check"],
            params: &[ParamSpec::site_root(), ParamSpec::drafts()],
        },
    ],
};
