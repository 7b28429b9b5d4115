//! Options feeding single and multiple choice widgets.

use serde::Serialize;

/// One entry of a choice widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption<V> {
    pub value: V,
    pub label: String,
    pub disabled: bool,
}

impl<V> SelectOption<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
        }
    }

    /// Disabled entry shown first, e.g. "Select brand".
    pub fn placeholder(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: true,
        }
    }
}

/// Turns records into options, prepending `placeholder`.
///
/// `value_of` and `label_of` pick the value and label out of each record. The
/// source order is preserved after the placeholder.
pub fn transform_to_select_option<T, V, L>(
    items: &[T],
    value_of: impl Fn(&T) -> V,
    label_of: impl Fn(&T) -> L,
    placeholder: SelectOption<V>,
) -> Vec<SelectOption<V>>
where
    L: Into<String>,
{
    let mut options = Vec::with_capacity(items.len() + 1);
    options.push(placeholder);
    options.extend(
        items
            .iter()
            .map(|item| SelectOption::new(value_of(item), label_of(item))),
    );
    options
}

/// Closed set of values that can be offered as options.
pub trait OptionSet: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;
}

/// Options for every value of a closed status enum, value and label alike.
pub fn status_options<S: OptionSet>() -> Vec<SelectOption<String>> {
    S::ALL
        .iter()
        .map(|status| SelectOption::new(status.as_str().to_string(), status.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i32,
        name: &'static str,
    }

    #[test]
    fn placeholder_comes_first_and_order_is_kept() {
        let items = vec![Item { id: 1, name: "A" }, Item { id: 2, name: "B" }];
        let before = items.clone();

        let options = transform_to_select_option(
            &items,
            |item| item.id,
            |item| item.name,
            SelectOption::placeholder(0, "Pick"),
        );

        assert_eq!(
            options,
            vec![
                SelectOption {
                    value: 0,
                    label: "Pick".to_string(),
                    disabled: true
                },
                SelectOption {
                    value: 1,
                    label: "A".to_string(),
                    disabled: false
                },
                SelectOption {
                    value: 2,
                    label: "B".to_string(),
                    disabled: false
                },
            ]
        );
        assert_eq!(items, before);
    }

    #[test]
    fn empty_source_yields_only_the_placeholder() {
        let items: Vec<Item> = Vec::new();

        let options = transform_to_select_option(
            &items,
            |item| item.id,
            |item| item.name,
            SelectOption::placeholder(0, "Select tags"),
        );

        assert_eq!(options.len(), 1);
        assert!(options[0].disabled);
    }

    #[derive(Clone, Copy)]
    enum Light {
        On,
        Off,
    }

    impl OptionSet for Light {
        const ALL: &'static [Self] = &[Light::On, Light::Off];

        fn as_str(&self) -> &'static str {
            match self {
                Light::On => "ON",
                Light::Off => "OFF",
            }
        }
    }

    #[test]
    fn status_options_list_every_value() {
        let options = status_options::<Light>();

        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["ON", "OFF"]);
        assert!(options.iter().all(|o| !o.disabled));
    }
}
