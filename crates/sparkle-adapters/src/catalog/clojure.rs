// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clojure generators: Babashka, Cryogen and Perun.

use sparkle_core::Language;
use sparkle_skill::{ParamKind, ParamSpec, ToolSpec};

use crate::spec::{AdapterSpec, version_tool};

pub static BABASHKA: AdapterSpec = AdapterSpec {
    key: "babashka",
    name: "Babashka",
    language: Language::Clojure,
    binary: "bb",
    description: "Native Clojure scripting runtime driving site builds through bb.edn tasks",
    version: version_tool("babashka_version", "Get Babashka version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "babashka_run",
            description: "Run a task defined in bb.edn",
            command: &["run"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::positional("task", ParamKind::Text, "Task name", "task").required(),
            ],
        },
        ToolSpec {
            name: "babashka_tasks",
            description: "List the tasks defined in bb.edn",
            command: &["tasks"],
            params: &[ParamSpec::site_root()],
        },
    ],
};

pub static CRYOGEN: AdapterSpec = AdapterSpec {
    key: "cryogen",
    name: "Cryogen",
    language: Language::Clojure,
    binary: "lein",
    description: "Simple static site generator for Clojure built on Leiningen",
    version: version_tool("cryogen_version", "Get Leiningen version", &["version"]),
    tools: &[
        ToolSpec {
            name: "cryogen_new",
            description: "Create a new Cryogen site from the template",
            command: &["new", "cryogen"],
            params: &[
                ParamSpec::site_root(),
                ParamSpec::positional("name", ParamKind::Text, "Project name", "project name")
                    .required(),
            ],
        },
        ToolSpec {
            name: "cryogen_build",
            description: "Compile the site",
            command: &["run"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "cryogen_serve",
            description: "Start the development server with live reload",
            command: &["serve"],
            params: &[ParamSpec::site_root()],
        },
    ],
};

pub static PERUN: AdapterSpec = AdapterSpec {
    key: "perun",
    name: "Perun",
    language: Language::Clojure,
    binary: "boot",
    description: "Composable static site generator built from Boot tasks",
    version: version_tool("perun_version", "Get Boot version", &["--version"]),
    tools: &[
        ToolSpec {
            name: "perun_build",
            description: "Run the site's build task",
            command: &["build"],
            params: &[ParamSpec::site_root()],
        },
        ToolSpec {
            name: "perun_dev",
            description: "Run the site's dev task with file watching",
            command: &["dev"],
            params: &[ParamSpec::site_root()],
        },
    ],
};
