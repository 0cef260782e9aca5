pub use stadtrunde_boundary::Theme;

use super::prelude::*;

pub fn load_hide_visited<S>(storage: &S) -> bool
where
    S: KeyValueStorage,
{
    storage::get_or_log(storage, keys::HIDE_VISITED).unwrap_or(false)
}

pub fn save_hide_visited<S>(storage: &S, hide_visited: bool) -> Result<()>
where
    S: KeyValueStorage,
{
    storage.set(keys::HIDE_VISITED, &hide_visited)?;
    Ok(())
}

pub fn load_theme<S>(storage: &S) -> Theme
where
    S: KeyValueStorage,
{
    storage::get_or_log(storage, keys::THEME).unwrap_or_default()
}

pub fn save_theme<S>(storage: &S, theme: Theme) -> Result<()>
where
    S: KeyValueStorage,
{
    storage.set(keys::THEME, &theme)?;
    Ok(())
}
