use payloads::Matchers;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Categories offered as toggles.
    pub categories: Vec<AttrValue>,
    pub selected: Matchers,
    pub on_change: Callback<Matchers>,
}

/// Row of category toggles. Nothing selected means everything is shown.
#[function_component]
pub fn CategoryFilter(props: &Props) -> Html {
    let chip = |category: &AttrValue| {
        let active = props.selected.contains(category);
        let onclick = {
            let category = category.clone();
            let selected = props.selected.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: MouseEvent| {
                on_change.emit(selected.toggled(&category))
            })
        };
        let classes = if active {
            "px-3 py-1 rounded-full text-sm bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900"
        } else {
            "px-3 py-1 rounded-full text-sm border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300"
        };
        html! {
            <button {onclick} class={classes} aria-pressed={active.to_string()}>
                {category.clone()}
            </button>
        }
    };

    let clear = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(Matchers::all()))
    };

    html! {
        <div class="flex flex-wrap items-center gap-2">
            {for props.categories.iter().map(chip)}
            if !props.selected.is_empty() {
                <button
                    onclick={clear}
                    class="px-3 py-1 text-sm text-neutral-500 hover:underline"
                >
                    {"Show all"}
                </button>
            }
        </div>
    }
}
