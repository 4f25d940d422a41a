use payloads::DisplayExhibition;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::access::AccessGate;
use crate::hooks::use_push_route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub exhibition: DisplayExhibition,
}

/// Teaser for an exhibition: obscured cover, lock badge and a members-only
/// caption, whoever is looking. Activating it goes through the
/// [`AccessGate`], which picks login or the detail page.
#[function_component]
pub fn LockedExhibitionCard(props: &Props) -> Html {
    let (state, _) = use_store::<State>();
    let push_route = use_push_route();
    let exhibition = &props.exhibition;

    let activate = {
        let id = exhibition.id.clone();
        Callback::from(move |_: ()| {
            AccessGate::new(state.clone(), push_route.clone()).activate(&id)
        })
    };
    let onclick = activate.reform(|_: MouseEvent| ());
    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" || e.key() == " " {
            e.prevent_default();
            activate.emit(());
        }
    });

    let cover = if exhibition.has_cover_image() {
        html! {
            <img
                src={exhibition.cover_image.clone()}
                alt=""
                class="w-full h-48 object-cover blur-md scale-110"
            />
        }
    } else {
        html! {
            <div class="w-full h-48 bg-neutral-200 dark:bg-neutral-700"></div>
        }
    };

    html! {
        <div
            role="button"
            tabindex="0"
            {onclick}
            {onkeydown}
            class="group relative overflow-hidden rounded-lg border border-neutral-200 dark:border-neutral-700 cursor-pointer focus:outline-none focus:ring-2 focus:ring-neutral-500"
        >
            <div class="relative overflow-hidden">
                {cover}
                <span class="absolute top-2 right-2 inline-flex items-center rounded-full bg-neutral-900/80 px-2 py-1 text-xs font-medium text-white">
                    {"🔒 Locked"}
                </span>
            </div>
            <div class="p-4 space-y-1">
                <p class="text-xs uppercase tracking-wide text-neutral-500 dark:text-neutral-400">
                    {exhibition.theme.clone()}
                </p>
                <h3 class="font-semibold text-neutral-900 dark:text-white">
                    {exhibition.title.clone()}
                </h3>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {format!("{} · {}", exhibition.exhibitor, exhibition.start_date)}
                </p>
                <p class="text-sm italic text-neutral-500 dark:text-neutral-400">
                    {"Members only"}
                </p>
            </div>
        </div>
    }
}
