use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// One entry of a selector drop-down
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Options headed by the "all" sentinel entry
pub fn options_with_all(all_label: &str, values: impl IntoIterator<Item = (String, String)>) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: contracts::shared::record_filter::ALL_SENTINEL.to_string(),
        label: all_label.to_string(),
    }];
    options.extend(values.into_iter().map(|(value, label)| SelectOption { value, label }));
    options
}

/// FilterPanel: search box plus selector drop-downs of a list page
#[component]
pub fn FilterPanel(
    /// Free-text query
    query: RwSignal<String>,

    #[prop(into)]
    placeholder: String,

    /// Number of active criteria (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Clears every criterion
    on_reset: Callback<()>,

    /// Selector controls, usually `FilterSelect`s
    children: Children,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| on_reset.run(())
                        disabled=Signal::derive(move || active_filters_count.get() == 0)
                    >
                        "Reset"
                    </Button>
                </div>
            </div>

            <div class="filter-panel-content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div class="filter-panel__search">
                        {icon("search")}
                        <Input value=query placeholder=placeholder />
                    </div>
                    {children()}
                </Flex>
            </div>
        </div>
    }
}

/// Labelled select bound to a selector value
#[component]
pub fn FilterSelect(
    value: RwSignal<String>,
    options: Vec<SelectOption>,
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    view! {
        <div class="filter-panel__select">
            {label.map(|l| view! { <Label>{l}</Label> })}
            <Select value=value>
                {options.into_iter().map(|opt| view! {
                    <option value=opt.value>{opt.label}</option>
                }).collect_view()}
            </Select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_with_all() {
        let options = options_with_all(
            "All Departments",
            [("IT".to_string(), "IT".to_string())],
        );
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "all");
        assert_eq!(options[1].label, "IT");
    }
}
