//! Project gallery: filter the catalog, cap it, and turn it into card markup.
//!
//! [`render`] is the pure part. [`Grid`] binds one view (home or full
//! listing) to a [`GridSurface`] and remembers its [`FilterState`];
//! [`Gallery`] ties every mounted grid to the shared [`FilterBar`] so a single
//! click re-renders all of them, each with its own fixed limit.

use std::borrow::Cow;
use std::num::NonZeroUsize;

use crate::catalog::{Category, ProjectRecord, PROFILE_URL};
use crate::config::GalleryConfig;
use crate::control::ToggleControl;

/// Entrance animation offset between consecutive cards.
pub const STAGGER_MS: usize = 100;

pub const EMPTY_PLACEHOLDER: &str = "No projects found in this category.";

/// Class marking the selected filter button.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Only(Category),
    /// A selector that names no category; matches nothing.
    Unrecognized,
}

impl Filter {
    /// Interprets a button's `data-filter` attribute.
    pub fn from_attr(value: &str) -> Self {
        match value {
            "all" => Filter::All,
            other => other.parse().map_or(Filter::Unrecognized, Filter::Only),
        }
    }

    pub fn matches(self, record: &ProjectRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(c) => record.category == c,
            Filter::Unrecognized => false,
        }
    }
}

/// Records passing `filter`, in catalog order, truncated to `limit`.
pub fn render<'a>(
    catalog: &'a [ProjectRecord],
    filter: Filter,
    limit: Option<NonZeroUsize>,
) -> Vec<&'a ProjectRecord> {
    let matching = catalog.iter().filter(|p| filter.matches(p));
    match limit {
        Some(n) => matching.take(n.get()).collect(),
        None => matching.collect(),
    }
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Markup for one card; `index` is its position in the visible sequence.
pub fn card_markup(project: &ProjectRecord, index: usize) -> String {
    let chips: String = project
        .tags
        .iter()
        .map(|tag| {
            format!(
                r#"<span class="px-2 py-1 text-xs rounded bg-slate-700/50 text-slate-300 border border-slate-700">{}</span>"#,
                escape(tag)
            )
        })
        .collect();

    format!(
        r#"<div class="bg-card border border-slate-700 rounded-2xl p-6 hover:border-primary transition-all duration-300 hover:-translate-y-2 group animate-fade-in" style="animation-delay: {delay}ms">
    <div class="flex justify-between items-start mb-4">
        <div class="w-12 h-12 rounded-lg bg-slate-800 flex items-center justify-center">
            <i class="fa-solid {icon} {accent} text-2xl"></i>
        </div>
        <a href="{PROFILE_URL}" target="_blank" class="text-slate-500 hover:text-white transition-colors"><i class="fa-solid fa-arrow-up-right-from-square"></i></a>
    </div>
    <h3 class="text-xl font-bold text-white mb-2 group-hover:text-primary transition-colors">{title}</h3>
    <p class="text-slate-400 text-sm mb-4 line-clamp-3">{desc}</p>
    <div class="flex flex-wrap gap-2 mt-auto">{chips}</div>
</div>
"#,
        delay = index * STAGGER_MS,
        icon = escape(project.icon_glyph),
        accent = escape(project.accent_color),
        title = escape(project.title),
        desc = escape(project.description),
    )
}

/// Cards for every visible record, or the placeholder when there are none.
pub fn grid_markup(visible: &[&ProjectRecord]) -> String {
    if visible.is_empty() {
        return format!(
            r#"<p class="text-slate-500 col-span-full text-center py-8">{EMPTY_PLACEHOLDER}</p>"#
        );
    }
    visible
        .iter()
        .enumerate()
        .map(|(i, p)| card_markup(p, i))
        .collect()
}

/// Which page a grid lives on; fixes its display limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridView {
    Home,
    FullListing,
}

impl GridView {
    pub fn limit(self, cfg: &GalleryConfig) -> Option<NonZeroUsize> {
        match self {
            GridView::Home => Some(cfg.home_limit),
            GridView::FullListing => None,
        }
    }
}

/// Receives the markup of a grid container.
pub trait GridSurface {
    fn set_markup(&mut self, markup: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub active: Filter,
    pub limit: Option<NonZeroUsize>,
}

pub struct Grid<S> {
    view: GridView,
    catalog: &'static [ProjectRecord],
    state: FilterState,
    surface: S,
}

impl<S: GridSurface> Grid<S> {
    /// Mounts the grid and draws it with every category visible.
    pub fn mount(
        view: GridView,
        catalog: &'static [ProjectRecord],
        cfg: &GalleryConfig,
        surface: S,
    ) -> Self {
        let mut grid = Self {
            view,
            catalog,
            state: FilterState {
                active: Filter::All,
                limit: view.limit(cfg),
            },
            surface,
        };
        grid.show(Filter::All);
        grid
    }

    pub fn show(&mut self, filter: Filter) {
        self.state.active = filter;
        let visible = self.visible();
        log::debug!(
            "{:?} grid: {:?} -> {} card(s)",
            self.view,
            filter,
            visible.len()
        );
        self.surface.set_markup(&grid_markup(&visible));
    }

    pub fn visible(&self) -> Vec<&'static ProjectRecord> {
        render(self.catalog, self.state.active, self.state.limit)
    }

    pub fn view(&self) -> GridView {
        self.view
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// The shared filter buttons; exactly one is active after any selection.
pub struct FilterBar<T> {
    buttons: Vec<(Filter, T)>,
}

impl<T: ToggleControl> FilterBar<T> {
    pub fn new(buttons: Vec<(Filter, T)>) -> Self {
        Self { buttons }
    }

    /// Activates button `index`, deactivating the rest.
    pub fn select(&mut self, index: usize) -> Option<Filter> {
        let filter = self.buttons.get(index)?.0;
        for (i, (_, button)) in self.buttons.iter_mut().enumerate() {
            button.set_class(ACTIVE_CLASS, i == index);
        }
        Some(filter)
    }

    pub fn active(&self) -> Vec<usize> {
        self.buttons
            .iter()
            .enumerate()
            .filter(|(_, (_, b))| b.has_class(ACTIVE_CLASS))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

pub struct Gallery<S, T> {
    grids: Vec<Grid<S>>,
    bar: FilterBar<T>,
}

impl<S: GridSurface, T: ToggleControl> Gallery<S, T> {
    pub fn new(grids: Vec<Grid<S>>, bar: FilterBar<T>) -> Self {
        Self { grids, bar }
    }

    /// Handles a click on filter button `index`.
    pub fn click(&mut self, index: usize) {
        let Some(filter) = self.bar.select(index) else {
            log::warn!("filter button {index} out of range");
            return;
        };
        for grid in &mut self.grids {
            grid.show(filter);
        }
    }

    pub fn grids(&self) -> &[Grid<S>] {
        &self.grids
    }

    pub fn bar(&self) -> &FilterBar<T> {
        &self.bar
    }
}
