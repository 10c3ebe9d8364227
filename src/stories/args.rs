//! Per-story args state

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::arg_types::ArgRows;

/// Current value of every arg of one rendered story
///
/// Starts with `null` for each row and only changes through
/// [`ArgsState::update_args`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArgsState {
    values: IndexMap<String, Value>,
}

impl ArgsState {
    pub fn from_rows(rows: &ArgRows) -> Self {
        Self {
            values: rows.keys().map(|key| (key.clone(), Value::Null)).collect(),
        }
    }

    /// Shallow merge: keys in `partial` overwrite, every other key is kept
    pub fn update_args<I>(&mut self, partial: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.values.extend(partial);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_map(&self) -> &IndexMap<String, Value> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::arg_types::ArgRow;
    use proptest::prelude::*;
    use serde_json::json;

    fn rows(keys: &[&str]) -> ArgRows {
        keys.iter()
            .map(|k| (k.to_string(), ArgRow::default()))
            .collect()
    }

    #[test]
    fn test_initial_state_is_all_null() {
        let state = ArgsState::from_rows(&rows(&["a", "b"]));
        assert_eq!(serde_json::to_value(&state).unwrap(), json!({"a": null, "b": null}));
    }

    #[test]
    fn test_update_overwrites_only_given_keys() {
        let mut state = ArgsState::from_rows(&rows(&["a", "b"]));
        state.update_args([("a".to_string(), json!(5))]);
        assert_eq!(serde_json::to_value(&state).unwrap(), json!({"a": 5, "b": null}));
    }

    #[test]
    fn test_update_can_add_unknown_keys() {
        let mut state = ArgsState::from_rows(&rows(&["a"]));
        state.update_args([("extra".to_string(), json!("x"))]);
        assert_eq!(state.len(), 2);
        assert_eq!(state.get("a"), Some(&Value::Null));
    }

    fn json_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            "[a-z]{0,8}".prop_map(Value::String),
        ]
    }

    proptest! {
        #[test]
        fn prop_update_is_shallow_merge(
            initial in prop::collection::btree_map("[a-e]", json_leaf(), 0..5),
            partial in prop::collection::btree_map("[a-h]", json_leaf(), 0..5),
        ) {
            let mut state = ArgsState::default();
            state.update_args(initial.clone());
            let before = state.clone();

            state.update_args(partial.clone());

            for (key, value) in before.iter() {
                prop_assert!(state.get(key).is_some());
                if !partial.contains_key(key) {
                    prop_assert_eq!(state.get(key), Some(value));
                }
            }
            for (key, value) in &partial {
                prop_assert_eq!(state.get(key), Some(value));
            }
            prop_assert!(state.len() >= before.len());
        }
    }
}
