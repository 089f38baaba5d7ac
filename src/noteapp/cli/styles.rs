use console::Style;
use once_cell::sync::Lazy;

pub struct Styles {
    pub index: Style,
    pub title: Style,
    pub preview: Style,
    pub time: Style,
    pub favorite: Style,
    pub heading: Style,
    pub draft: Style,
}

pub static STYLES: Lazy<Styles> = Lazy::new(|| Styles {
    index: Style::new().yellow(),
    title: Style::new().bold(),
    preview: Style::new(),
    time: Style::new().color256(246).italic(),
    favorite: Style::new().yellow(),
    heading: Style::new().cyan().bold(),
    draft: Style::new().dim(),
});
