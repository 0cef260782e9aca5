use leptos::*;

use stadtrunde_core::usecases::ListItem;

const LOADING_MESSAGE: &str = "Lade Standort-Koordinaten… Dies kann einen Moment dauern.";

#[component]
pub fn LocationList(
    items: Signal<Vec<ListItem>>,
    /// The list stays empty until all coordinates are known.
    settled: Signal<bool>,
    open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into)] on_show_on_map: Callback<String>,
) -> impl IntoView {
    view! {
      <section
        id="locations-list"
        class=move || if open.get() { "open" } else { "" }
      >
        <Show
          when=move || settled.get()
          fallback=|| view! { <p>{ LOADING_MESSAGE }</p> }
        >
          <For
            each=move || items.get()
            key=|item| (item.address.clone(), item.visited, item.distance_text.clone())
            let:item
          >
            <LocationItem item on_toggle on_show_on_map />
          </For>
        </Show>
      </section>
    }
}

#[component]
fn LocationItem(
    item: ListItem,
    on_toggle: Callback<String>,
    on_show_on_map: Callback<String>,
) -> impl IntoView {
    let ListItem {
        address,
        visited,
        title,
        address_line,
        distance_text,
        map_pos,
        navigation_url,
    } = item;
    let toggle_address = address.clone();

    view! {
      <div class=if visited { "location-item visited" } else { "location-item" }>
        <input
          type="checkbox"
          prop:checked=visited
          on:change=move |_| on_toggle.call(toggle_address.clone())
        />
        <div class="info">
          { distance_text.map(|text| view! { <p class="distance">{ text }</p> }) }
          <h3>{ title }</h3>
          <p>{ address_line }</p>
          <div class="actions">
            <button
              class="map-link"
              disabled=map_pos.is_none()
              on:click=move |_| on_show_on_map.call(address.clone())
            >
              "Auf Karte zeigen"
            </button>
            <a href=navigation_url target="_blank" rel="noopener" class="gmaps-link">"Navigation"</a>
          </div>
        </div>
      </div>
    }
}
