use std::fmt::Display;
use std::io;

use termenu::{Item, Menu};

/// fzf-like single choice menu over a list of displayable items.
pub struct FzfInvoker<T> {
    title: String,
    items: Vec<T>,
}

impl<T> FzfInvoker<T>
where
    T: Display + Clone,
{
    pub fn new(title: String, items: Vec<T>) -> Self {
        Self { title, items }
    }

    /// Show the menu and return the selected item, or `None` if the user
    /// cancelled.
    pub fn invoke(&self) -> io::Result<Option<T>> {
        let mut menu = Menu::new()?;

        let list: Vec<Item<usize>> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| Item::new(&item.to_string(), idx))
            .collect();

        let selected = menu.set_title(self.title.as_str()).add_list(list).select()?;

        Ok(selected.and_then(|idx| self.items.get(*idx).cloned()))
    }
}
