/// Panel width variants. `Medium` is the baseline and adds no extra class.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PanelSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PanelSize {
    pub fn class(self) -> Option<&'static str> {
        match self {
            PanelSize::Small => Some("overlay-panel-sm"),
            PanelSize::Large => Some("overlay-panel-lg"),
            PanelSize::Medium => None,
        }
    }
}

/// Everything the open overlay needs to render its panel chrome.
#[derive(Clone, PartialEq, Debug)]
pub struct PanelModel {
    title: Option<String>,
    size: PanelSize,
    extra_classes: String,
    has_footer: bool,
}

impl PanelModel {
    pub fn new(
        title: Option<String>,
        size: PanelSize,
        extra_classes: String,
        has_footer: bool,
    ) -> Self {
        // An empty title collapses to no title region at all
        let title = title.filter(|t| !t.is_empty());
        Self {
            title,
            size,
            extra_classes,
            has_footer,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn size(&self) -> PanelSize {
        self.size
    }

    pub fn has_footer(&self) -> bool {
        self.has_footer
    }

    /// Class attribute for the panel node: the baseline hook, then the size
    /// hook if any, then caller-supplied classes.
    pub fn panel_class(&self) -> String {
        let mut class = String::from("overlay-panel");
        if let Some(size_class) = self.size.class() {
            class.push(' ');
            class.push_str(size_class);
        }
        if !self.extra_classes.is_empty() {
            class.push(' ');
            class.push_str(&self.extra_classes);
        }
        class
    }
}

/// The two render states of the widget. `Closed` produces no output and no
/// side effects; `Open` carries the panel configuration for this render.
#[derive(Clone, PartialEq, Debug)]
pub enum Presentation {
    Closed,
    Open(PanelModel),
}

impl Presentation {
    pub fn resolve(
        open: bool,
        title: Option<String>,
        size: PanelSize,
        extra_classes: String,
        has_footer: bool,
    ) -> Self {
        if open {
            Presentation::Open(PanelModel::new(title, size, extra_classes, has_footer))
        } else {
            Presentation::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Presentation::Open(_))
    }
}
