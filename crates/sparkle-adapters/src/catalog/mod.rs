// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in adapter tables, grouped by implementation language.

pub mod beam;
pub mod clojure;
pub mod functional;
pub mod julia;
pub mod jvm;
pub mod lisp;
pub mod misc;
pub mod racket;
pub mod rust;

use crate::spec::AdapterSpec;

/// Every built-in adapter in registry order.
pub static CATALOG: [&AdapterSpec; 28] = [
    &clojure::BABASHKA,
    &clojure::CRYOGEN,
    &clojure::PERUN,
    &lisp::COLESLAW,
    &lisp::MARMOT,
    &lisp::REGGAE,
    &beam::NIMBLE_PUBLISHER,
    &beam::SERUM,
    &beam::TABLEAU,
    &beam::ZOTONIC,
    &functional::FORNAX,
    &functional::EMA,
    &functional::HAKYLL,
    &julia::DOCUMENTER,
    &julia::FRANKLIN,
    &julia::STATICWEBPAGES,
    &jvm::ORCHID,
    &misc::NIMROD,
    &functional::YOCAML,
    &racket::FROG,
    &racket::POLLEN,
    &rust::COBALT,
    &rust::MDBOOK,
    &rust::ZOLA,
    &jvm::LAIKA,
    &jvm::SCALATEX,
    &misc::PUBLISH,
    &misc::WUB,
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;
    use sparkle_security::is_valid_argument;

    use super::*;

    const KEYS: [&str; 28] = [
        "babashka",
        "cryogen",
        "perun",
        "coleslaw",
        "marmot",
        "reggae",
        "nimblePublisher",
        "serum",
        "tableau",
        "zotonic",
        "fornax",
        "ema",
        "hakyll",
        "documenter",
        "franklin",
        "staticwebpages",
        "orchid",
        "nimrod",
        "yocaml",
        "frog",
        "pollen",
        "cobalt",
        "mdbook",
        "zola",
        "laika",
        "scalatex",
        "publish",
        "wub",
    ];

    #[test]
    fn catalog_is_in_registry_order() {
        let keys: Vec<_> = CATALOG.iter().map(|spec| spec.key).collect();
        assert_eq!(keys, KEYS);
    }

    #[test]
    fn tool_names_are_unique_across_adapters() {
        let mut seen = HashSet::new();
        for spec in CATALOG {
            for tool in spec.tools.iter().chain(std::iter::once(&spec.version)) {
                assert!(seen.insert(tool.name), "duplicate tool {}", tool.name);
            }
        }
    }

    #[test]
    fn every_adapter_has_a_version_tool() {
        for spec in CATALOG {
            assert!(
                spec.version.name.ends_with("_version"),
                "{} version tool is {}",
                spec.key,
                spec.version.name
            );
            assert!(spec.version.params.is_empty());
        }
    }

    #[test]
    fn fixed_command_words_pass_the_allow_list() {
        for spec in CATALOG {
            assert!(is_valid_argument(spec.binary), "{}", spec.binary);
            for tool in spec.tools.iter().chain(std::iter::once(&spec.version)) {
                for word in tool.command {
                    assert!(is_valid_argument(word), "{}: {word}", tool.name);
                }
            }
        }
    }

    #[test]
    fn every_param_is_declared_in_its_schema() {
        for spec in CATALOG {
            for tool in spec.tools {
                let schema = tool.input_schema();
                assert_eq!(schema["type"], "object");
                for param in tool.params {
                    assert!(
                        schema["properties"][param.name].is_object(),
                        "{} lacks {}",
                        tool.name,
                        param.name
                    );
                }
            }
        }
    }

    #[test]
    fn zola_serve_renders_full_argument_vector() {
        let serve = rust::ZOLA
            .tools
            .iter()
            .find(|tool| tool.name == "zola_serve")
            .unwrap();
        let invocation = serve
            .build(&json!({
                "path": "site",
                "port": 8080,
                "interface": "127.0.0.1",
                "drafts": true,
                "openBrowser": true,
            }))
            .unwrap();
        assert_eq!(
            invocation.args,
            [
                "serve",
                "--port",
                "8080",
                "--interface",
                "127.0.0.1",
                "--drafts",
                "--open"
            ]
        );
        assert_eq!(invocation.cwd.as_deref(), Some("site"));
    }

    #[test]
    fn zola_build_rejects_bad_base_url() {
        let build = &rust::ZOLA.tools[1];
        assert_eq!(build.name, "zola_build");
        let err = build
            .build(&json!({ "baseUrl": "javascript:alert(1)" }))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid base URL");
    }

    #[test]
    fn zola_init_places_path_as_argument() {
        let init = &rust::ZOLA.tools[0];
        let invocation = init
            .build(&json!({ "path": "blog", "force": true }))
            .unwrap();
        assert_eq!(invocation.args, ["init", "blog", "--force"]);
        assert_eq!(invocation.cwd, None);
    }
}
