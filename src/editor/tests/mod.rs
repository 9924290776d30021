//! Unit tests for the editor module
//!
//! Exercised against the in-memory store with scripted confirmations, so
//! every prompt and every save is observable.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Cursor;

use serde_yaml::{Mapping, Value};

use crate::config_store::MemoryConfigStore;
use crate::editor::{
    AutoAnswer, Change, Chooser, ConfigKeyEditor, Confirmer, EditorError, InputFormat,
    ReaderInput, ScriptedAnswers, SetOutcome, SetRequest, TerminalPrompt, csv_to_array,
    normalize_value, validate_config_name,
};

fn yaml(source: &str) -> Value {
    serde_yaml::from_str(source).unwrap()
}

fn mapping(source: &str) -> Mapping {
    match yaml(source) {
        Value::Mapping(map) => map,
        other => panic!("expected mapping, got {other:?}"),
    }
}

fn site_store() -> MemoryConfigStore {
    let store = MemoryConfigStore::new();
    store.insert(
        "system.site",
        mapping("name: Drupal\nslogan: ''\npage:\n  front: /node\n  403: ''\n"),
    );
    store.insert(
        "user.role.anonymous",
        mapping("id: anonymous\npermissions: [access content]\n"),
    );
    store
}

fn no_input() -> ReaderInput<Cursor<Vec<u8>>> {
    ReaderInput::new(Cursor::new(Vec::new()))
}

fn request<'a>(config_name: &'a str, key: &'a str, value: &'a str) -> SetRequest<'a> {
    SetRequest {
        config_name,
        key,
        value,
        input_format: InputFormat::String,
    }
}

fn set(
    store: &MemoryConfigStore,
    request: &SetRequest<'_>,
    answers: &mut ScriptedAnswers,
) -> Result<SetOutcome, EditorError> {
    ConfigKeyEditor::new(store, false).set(request, answers, &mut no_input())
}

fn get_key(store: &MemoryConfigStore, name: &str, key: &str) -> Value {
    let result = ConfigKeyEditor::new(store, false)
        .get(name, Some(key), false)
        .unwrap();
    result
        .get(format!("{name}:{key}").as_str())
        .cloned()
        .expect("single-key result")
}

mod normalization {
    use super::*;

    #[test]
    fn null_token_in_any_case_is_null() {
        for raw in ["null", "NULL", "Null"] {
            let value = normalize_value(raw, InputFormat::String, &mut no_input()).unwrap();
            assert_eq!(value, Value::Null, "{raw}");
        }
    }

    #[test]
    fn empty_list_token_is_empty_sequence() {
        let value = normalize_value("[]", InputFormat::String, &mut no_input()).unwrap();

        assert_eq!(value, Value::Sequence(Vec::new()));
    }

    #[test]
    fn string_format_keeps_text() {
        let value = normalize_value("{a: 1}", InputFormat::String, &mut no_input()).unwrap();

        assert_eq!(value, Value::String("{a: 1}".to_string()));
    }

    #[test]
    fn yaml_format_parses_yaml_and_json() {
        let from_yaml =
            normalize_value("{403: '403', front: home}", InputFormat::Yaml, &mut no_input())
                .unwrap();
        let from_json =
            normalize_value(r#"{"front": "home"}"#, InputFormat::Yaml, &mut no_input()).unwrap();

        assert_eq!(from_yaml, yaml("403: '403'\nfront: home\n"));
        assert_eq!(from_json, yaml("front: home"));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let result = normalize_value("[foo, bar", InputFormat::Yaml, &mut no_input());

        assert!(matches!(result, Err(EditorError::Parse { .. })));
    }

    #[test]
    fn dash_reads_input_stream() {
        let mut input = ReaderInput::new(Cursor::new(b"piped value".to_vec()));

        let value = normalize_value("-", InputFormat::String, &mut input).unwrap();

        assert_eq!(value, Value::String("piped value".to_string()));
    }

    #[test]
    fn piped_null_token_becomes_null() {
        let mut input = ReaderInput::new(Cursor::new(b"NULL".to_vec()));

        let value = normalize_value("-", InputFormat::String, &mut input).unwrap();

        assert_eq!(value, Value::Null);
    }

    #[test]
    fn invalid_utf8_input_is_an_io_error() {
        let mut input = ReaderInput::new(Cursor::new(vec![0xff, 0xfe]));

        let result = normalize_value("-", InputFormat::String, &mut input);

        assert!(matches!(result, Err(EditorError::Io(_))));
    }

    #[test]
    fn input_format_parses_from_str() {
        assert_eq!("yaml".parse::<InputFormat>(), Ok(InputFormat::Yaml));
        assert_eq!("string".parse::<InputFormat>(), Ok(InputFormat::String));
        assert!("json".parse::<InputFormat>().is_err());
    }
}

mod names {
    use super::*;

    #[test]
    fn csv_is_split_trimmed_and_deduplicated() {
        assert_eq!(
            csv_to_array(" system.site, user.settings,,system.site "),
            vec!["system.site".to_string(), "user.settings".to_string()]
        );
    }

    #[test]
    fn structured_input_is_unchanged() {
        let names = vec!["b.b".to_string(), "a.a".to_string(), "b.b".to_string()];

        assert_eq!(csv_to_array(names.clone()), names);
    }

    #[test]
    fn validation_reports_first_missing_name_in_order() {
        let store = site_store();

        let result = validate_config_name(&store, "system.site,missing.one,missing.two");

        match result {
            Err(EditorError::NotFound(name)) => assert_eq!(name, "missing.one"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn validation_passes_for_existing_names() {
        let store = site_store();

        assert!(validate_config_name(&store, "system.site, user.role.anonymous").is_ok());
    }
}

mod get {
    use super::*;

    #[test]
    fn missing_object_is_not_found() {
        let store = site_store();

        let result = ConfigKeyEditor::new(&store, false).get("missing.config", None, false);

        assert!(matches!(result, Err(EditorError::NotFound(_))));
    }

    #[test]
    fn whole_object_and_single_key_reads_agree() {
        let store = site_store();
        let editor = ConfigKeyEditor::new(&store, false);

        let whole = editor.get("system.site", None, false).unwrap();
        let single = editor.get("system.site", Some("name"), false).unwrap();

        assert_eq!(single, yaml("'system.site:name': Drupal"));
        assert_eq!(whole.get("name"), single.get("system.site:name"));
    }

    #[test]
    fn nested_key_returns_subtree() {
        let store = site_store();

        assert_eq!(
            get_key(&store, "system.site", "page"),
            yaml("front: /node\n403: ''\n")
        );
        assert_eq!(get_key(&store, "system.site", "page.front"), yaml("/node"));
    }

    #[test]
    fn absent_key_reads_as_null() {
        let store = site_store();

        assert_eq!(get_key(&store, "system.site", "mail"), Value::Null);
    }

    #[test]
    fn overrides_are_applied_only_when_requested() {
        let store = site_store().with_override("system.site", yaml("name: Overridden"));
        let editor = ConfigKeyEditor::new(&store, false);

        let raw = editor.get("system.site", Some("name"), false).unwrap();
        let live = editor.get("system.site", Some("name"), true).unwrap();

        assert_eq!(raw, yaml("'system.site:name': Drupal"));
        assert_eq!(live, yaml("'system.site:name': Overridden"));
    }
}

mod set {
    use super::*;

    #[test]
    fn updating_existing_key_asks_update_question() {
        let store = site_store();
        let mut answers = ScriptedAnswers::new([true]);

        let outcome = set(&store, &request("system.site", "name", "MySite"), &mut answers).unwrap();

        assert_eq!(outcome, SetOutcome::Saved(Change::UpdateKey));
        assert_eq!(
            answers.asked(),
            ["Do you want to update name key in system.site config?"]
        );
        assert_eq!(get_key(&store, "system.site", "name"), yaml("MySite"));
    }

    #[test]
    fn null_token_stores_null_not_text() {
        let store = site_store();

        set(
            &store,
            &request("system.site", "name", "NULL"),
            &mut ScriptedAnswers::new([true]),
        )
        .unwrap();

        let stored = store.stored("system.site").unwrap();
        assert_eq!(stored.get("name"), Some(&Value::Null));
    }

    #[test]
    fn empty_list_token_stores_empty_sequence() {
        let store = site_store();

        set(
            &store,
            &request("user.role.anonymous", "permissions", "[]"),
            &mut ScriptedAnswers::new([true]),
        )
        .unwrap();

        assert_eq!(
            get_key(&store, "user.role.anonymous", "permissions"),
            Value::Sequence(Vec::new())
        );
    }

    #[test]
    fn yaml_structures_round_trip() {
        let store = site_store();
        let request = SetRequest {
            input_format: InputFormat::Yaml,
            ..request("user.role.anonymous", "permissions", "[foo, bar]")
        };

        set(&store, &request, &mut ScriptedAnswers::new([true])).unwrap();

        assert_eq!(
            get_key(&store, "user.role.anonymous", "permissions"),
            yaml("[foo, bar]")
        );
    }

    #[test]
    fn missing_key_asks_create_key_question() {
        let store = site_store();
        let mut answers = ScriptedAnswers::new([true]);

        let outcome = set(&store, &request("system.site", "mail", "a@b.c"), &mut answers).unwrap();

        assert_eq!(outcome, SetOutcome::Saved(Change::CreateKey));
        assert_eq!(
            answers.asked(),
            ["mail key does not exist in system.site config. Do you want to create a new config key?"]
        );
    }

    #[test]
    fn missing_object_asks_only_create_object_question() {
        let store = site_store();
        let mut answers = ScriptedAnswers::new([false, true, true]);

        let outcome = set(&store, &request("system.new", "name", "x"), &mut answers).unwrap();

        assert_eq!(outcome, SetOutcome::Declined(Change::CreateObject));
        assert_eq!(
            answers.asked(),
            ["system.new config does not exist. Do you want to create a new config object?"]
        );
        assert_eq!(store.stored("system.new"), None);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn confirmed_creation_persists_new_object() {
        let store = site_store();

        let outcome = set(
            &store,
            &request("system.new", "name", "x"),
            &mut ScriptedAnswers::new([true]),
        )
        .unwrap();

        assert_eq!(outcome, SetOutcome::Saved(Change::CreateObject));
        assert_eq!(store.stored("system.new"), Some(mapping("name: x")));
    }

    #[test]
    fn declined_update_changes_nothing() {
        let store = site_store();
        let before = store.stored("system.site");

        let outcome = set(
            &store,
            &request("system.site", "name", "Other"),
            &mut ScriptedAnswers::new([false]),
        )
        .unwrap();

        assert!(outcome.is_declined());
        assert_eq!(store.stored("system.site"), before);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn repeating_a_set_reports_existing_key() {
        let store = site_store();
        let set_mail = request("system.site", "mail", "a@b.c");

        let first = set(&store, &set_mail, &mut ScriptedAnswers::new([true])).unwrap();
        let state = store.stored("system.site");
        let second = set(&store, &set_mail, &mut ScriptedAnswers::new([true])).unwrap();

        assert_eq!(first.change(), Change::CreateKey);
        assert_eq!(second.change(), Change::UpdateKey);
        assert_eq!(store.stored("system.site"), state);
    }

    #[test]
    fn null_valued_key_counts_as_new() {
        let store = site_store();
        store.insert("system.site", mapping("name: ~"));

        let outcome = set(
            &store,
            &request("system.site", "name", "x"),
            &mut ScriptedAnswers::new([true]),
        )
        .unwrap();

        assert_eq!(outcome.change(), Change::CreateKey);
    }

    #[test]
    fn nested_key_path_is_created() {
        let store = site_store();

        set(
            &store,
            &request("system.site", "page.404", "/missing"),
            &mut ScriptedAnswers::new([true]),
        )
        .unwrap();

        assert_eq!(get_key(&store, "system.site", "page.404"), yaml("/missing"));
        assert_eq!(get_key(&store, "system.site", "page.front"), yaml("/node"));
    }

    #[test]
    fn unwritable_path_is_a_store_error() {
        let store = site_store();

        let result = set(
            &store,
            &request("system.site", "name.first", "x"),
            &mut ScriptedAnswers::new([true]),
        );

        assert!(matches!(result, Err(EditorError::Store(_))));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn parse_error_happens_before_any_prompt() {
        let store = site_store();
        let mut answers = ScriptedAnswers::new([true]);
        let request = SetRequest {
            input_format: InputFormat::Yaml,
            ..request("system.site", "page", "{front: [unclosed")
        };

        let result = set(&store, &request, &mut answers);

        assert!(matches!(result, Err(EditorError::Parse { .. })));
        assert!(answers.asked().is_empty());
    }
}

mod bulk {
    use super::*;

    fn bulk_request(value: &str) -> SetRequest<'_> {
        SetRequest {
            input_format: InputFormat::Yaml,
            ..request("system.site", "?", value)
        }
    }

    #[test]
    fn mapping_sets_every_key_with_one_save() {
        let store = site_store();
        let mut answers = ScriptedAnswers::new([true]);

        let outcome = set(&store, &bulk_request("{a: 1, b: 2}"), &mut answers).unwrap();

        assert_eq!(outcome, SetOutcome::Saved(Change::Bulk { keys: 2 }));
        assert_eq!(
            answers.asked(),
            ["Do you want to update or set multiple keys on system.site config?"]
        );
        assert_eq!(get_key(&store, "system.site", "a"), yaml("1"));
        assert_eq!(get_key(&store, "system.site", "b"), yaml("2"));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn declined_bulk_changes_nothing() {
        let store = site_store();

        let outcome = set(
            &store,
            &bulk_request("{a: 1}"),
            &mut ScriptedAnswers::new([false]),
        )
        .unwrap();

        assert_eq!(outcome, SetOutcome::Declined(Change::Bulk { keys: 1 }));
        assert_eq!(store.save_count(), 0);
        assert_eq!(get_key(&store, "system.site", "a"), Value::Null);
    }

    #[test]
    fn piped_yaml_document_drives_bulk_mode() {
        let store = site_store();
        let mut input =
            ReaderInput::new(Cursor::new(b"label: Auth user\nweight: 5\n".to_vec()));
        let request = SetRequest {
            input_format: InputFormat::Yaml,
            ..request("user.role.anonymous", "?", "-")
        };

        let outcome = ConfigKeyEditor::new(&store, false)
            .set(&request, &mut AutoAnswer(true), &mut input)
            .unwrap();

        assert_eq!(outcome.change(), Change::Bulk { keys: 2 });
        assert_eq!(
            get_key(&store, "user.role.anonymous", "label"),
            yaml("Auth user")
        );
        assert_eq!(get_key(&store, "user.role.anonymous", "weight"), yaml("5"));
    }

    #[test]
    fn integer_keys_are_applied_as_paths() {
        let store = site_store();

        set(
            &store,
            &bulk_request("{403: /denied}"),
            &mut ScriptedAnswers::new([true]),
        )
        .unwrap();

        assert_eq!(get_key(&store, "system.site", "403"), yaml("/denied"));
    }

    #[test]
    fn empty_mapping_falls_back_to_single_key() {
        let store = site_store();
        let mut answers = ScriptedAnswers::new([true]);

        let outcome = set(&store, &bulk_request("{}"), &mut answers).unwrap();

        assert_eq!(outcome.change(), Change::CreateKey);
        assert_eq!(get_key(&store, "system.site", "?"), yaml("{}"));
    }
}

mod simulate {
    use super::*;

    #[test]
    fn simulate_runs_pipeline_but_never_saves() {
        let store = site_store();
        let mut answers = ScriptedAnswers::new([true]);

        let outcome = ConfigKeyEditor::new(&store, true)
            .set(
                &request("system.site", "name", "MySite"),
                &mut answers,
                &mut no_input(),
            )
            .unwrap();

        assert_eq!(outcome, SetOutcome::Simulated(Change::UpdateKey));
        assert_eq!(answers.asked().len(), 1);
        assert_eq!(store.save_count(), 0);
        assert_eq!(get_key(&store, "system.site", "name"), yaml("Drupal"));
    }

    #[test]
    fn simulate_bulk_never_saves() {
        let store = site_store();
        let request = SetRequest {
            input_format: InputFormat::Yaml,
            ..request("system.site", "?", "{a: 1, b: 2}")
        };

        let outcome = ConfigKeyEditor::new(&store, true)
            .set(&request, &mut AutoAnswer(true), &mut no_input())
            .unwrap();

        assert_eq!(outcome, SetOutcome::Simulated(Change::Bulk { keys: 2 }));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn simulate_still_reports_parse_errors() {
        let store = site_store();
        let request = SetRequest {
            input_format: InputFormat::Yaml,
            ..request("system.site", "name", "[broken")
        };

        let result = ConfigKeyEditor::new(&store, true).set(
            &request,
            &mut AutoAnswer(true),
            &mut no_input(),
        );

        assert!(matches!(result, Err(EditorError::Parse { .. })));
    }
}

mod prompts {
    use super::*;

    fn terminal(input: &str) -> TerminalPrompt<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn terminal_accepts_yes_answers() {
        let mut prompt = terminal("y\nYES\nno\n\n");

        assert!(prompt.confirm("first?").unwrap());
        assert!(prompt.confirm("second?").unwrap());
        assert!(!prompt.confirm("third?").unwrap());
        assert!(!prompt.confirm("fourth?").unwrap());
    }

    #[test]
    fn terminal_end_of_input_declines() {
        let mut prompt = terminal("");

        assert!(!prompt.confirm("anything?").unwrap());
    }

    #[test]
    fn terminal_choice_by_index_or_value() {
        let choices = vec!["system.site".to_string(), "user.settings".to_string()];

        assert_eq!(
            terminal("1\n").choose("pick", &choices).unwrap(),
            Some("user.settings".to_string())
        );
        assert_eq!(
            terminal("system.site\n").choose("pick", &choices).unwrap(),
            Some("system.site".to_string())
        );
        assert_eq!(terminal("7\n").choose("pick", &choices).unwrap(), None);
    }

    #[test]
    fn auto_answer_never_chooses() {
        let mut yes = AutoAnswer(true);

        assert!(yes.confirm("ok?").unwrap());
        assert_eq!(yes.choose("pick", &["a.b".to_string()]).unwrap(), None);
    }

    #[test]
    fn scripted_answers_decline_once_exhausted() {
        let mut answers = ScriptedAnswers::new([true]);

        assert!(answers.confirm("one").unwrap());
        assert!(!answers.confirm("two").unwrap());
        assert_eq!(answers.asked(), ["one", "two"]);
    }
}
