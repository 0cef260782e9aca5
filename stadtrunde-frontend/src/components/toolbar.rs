use leptos::*;

use stadtrunde_core::usecases::Theme;

#[component]
pub fn Toolbar(
    hide_visited: Signal<bool>,
    #[prop(into)] on_hide_visited: Callback<bool>,
    #[prop(into)] on_refresh: Callback<()>,
    theme: Signal<Theme>,
    #[prop(into)] on_toggle_theme: Callback<()>,
    #[prop(into)] on_toggle_list: Callback<()>,
    status: Signal<Option<String>>,
) -> impl IntoView {
    view! {
      <header>
        <label>
          <input
            type="checkbox"
            prop:checked=move || hide_visited.get()
            on:change=move |ev| on_hide_visited.call(event_target_checked(&ev))
          />
          "Besuchte Standorte ausblenden"
        </label>
        <button on:click=move |_| on_refresh.call(())>"Standort aktualisieren"</button>
        <p class="status">{ move || status.get() }</p>
        <button class="overlay-toggle" on:click=move |_| on_toggle_list.call(())>"☰"</button>
        <button class="theme-toggle" on:click=move |_| on_toggle_theme.call(())>
          <span class="theme-toggle-icon">
            { move || if theme.get().is_dark() { "☀️" } else { "🌙" } }
          </span>
        </button>
      </header>
    }
}
