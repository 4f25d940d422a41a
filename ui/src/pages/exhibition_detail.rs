use payloads::{DisplayExhibition, ExhibitionId, Matchers};
use rust_decimal::Decimal;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::RequireAuth;
use crate::hooks::use_exhibitions;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: ExhibitionId,
}

#[function_component]
pub fn ExhibitionDetailPage(props: &Props) -> Html {
    html! {
        <RequireAuth>
            <ExhibitionDetail id={props.id.clone()} />
        </RequireAuth>
    }
}

#[function_component]
fn ExhibitionDetail(props: &Props) -> Html {
    let exhibitions = use_exhibitions(Matchers::all());
    let id = props.id.clone();

    exhibitions.render("exhibition", move |items, _, _| {
        match items.iter().find(|exhibition| exhibition.id == id) {
            Some(exhibition) => exhibition_view(exhibition),
            None => html! {
                <div class="text-center py-12 space-y-2">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"This exhibition is no longer on view."}
                    </p>
                    <Link<Route> to={Route::Gallery} classes="underline">
                        {"Back to the gallery"}
                    </Link<Route>>
                </div>
            },
        }
    })
}

fn format_price(price: Decimal) -> String {
    format!("${:.2}", price)
}

fn exhibition_view(exhibition: &DisplayExhibition) -> Html {
    html! {
        <article class="max-w-3xl mx-auto space-y-6">
            if exhibition.has_cover_image() {
                <img
                    src={exhibition.cover_image.clone()}
                    alt={exhibition.title.clone()}
                    class="w-full rounded-lg object-cover"
                />
            }
            <header class="space-y-1">
                <p class="text-xs uppercase tracking-wide text-neutral-500 dark:text-neutral-400">
                    {exhibition.theme.clone()}
                </p>
                <h1 class="text-3xl font-semibold text-neutral-900 dark:text-white">
                    {exhibition.title.clone()}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("{} · since {}", exhibition.exhibitor, exhibition.start_date)}
                </p>
            </header>
            if exhibition.is_for_sale {
                <p class="text-lg font-medium text-neutral-900 dark:text-white">
                    {format!("For sale: {}", format_price(exhibition.price))}
                </p>
            }
        </article>
    }
}
