use payloads::{DisplayExhibition, Matchers};
use yew::prelude::*;

use crate::components::{CategoryFilter, LockedExhibitionCard};
use crate::hooks::use_exhibitions;

/// Categories offered as filters above the grid.
const FEATURED_CATEGORIES: [&str; 5] =
    ["Modern", "Classic", "Contemporary", "Photography", "Sculpture"];

#[function_component]
pub fn GalleryPage() -> Html {
    let selected = use_state(Matchers::all);
    let exhibitions = use_exhibitions((*selected).clone());

    let on_change = {
        let selected = selected.clone();
        Callback::from(move |matchers: Matchers| selected.set(matchers))
    };
    let categories: Vec<AttrValue> =
        FEATURED_CATEGORIES.into_iter().map(AttrValue::Static).collect();

    html! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                <h1 class="text-2xl font-semibold text-neutral-900 dark:text-white">
                    {"Exhibitions"}
                </h1>
                <CategoryFilter
                    {categories}
                    selected={(*selected).clone()}
                    {on_change}
                />
            </div>
            {exhibitions.render("exhibitions", |items, is_loading, error| {
                html! {
                    <>
                        if is_loading {
                            <p class="text-sm text-neutral-500">{"Refreshing..."}</p>
                        }
                        if let Some(error) = error {
                            <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 text-sm text-red-700 dark:text-red-400">
                                {format!("Could not refresh exhibitions: {error}")}
                            </div>
                        }
                        {exhibition_grid(items)}
                    </>
                }
            })}
        </div>
    }
}

fn exhibition_grid(items: &[DisplayExhibition]) -> Html {
    if items.is_empty() {
        return html! {
            <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                {"No exhibitions in these categories yet."}
            </p>
        };
    }

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            {for items.iter().map(|exhibition| html! {
                <LockedExhibitionCard
                    key={exhibition.id.0.clone()}
                    exhibition={exhibition.clone()}
                />
            })}
        </div>
    }
}
