use std::fmt;

/// Viewport width below which the responsive block applies.
pub const RESPONSIVE_MAX_WIDTH_PX: u32 = 768;

/// Stylesheet flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CssFormat {
    /// Flat rules, one class selector per item.
    #[default]
    Standard,
    /// Item rules nested inside the container rule.
    Scss,
}

/// Breakpoint the user is designing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Breakpoint {
    #[default]
    Base,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub fn is_base(self) -> bool {
        matches!(self, Self::Base)
    }
}

/// Feature toggles consulted by the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratorOptions {
    /// Emit `grid-template-areas` and `grid-area` instead of line ranges.
    pub named_areas: bool,
    pub format: CssFormat,
    pub breakpoint: Breakpoint,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            named_areas: true,
            format: CssFormat::Standard,
            breakpoint: Breakpoint::Base,
        }
    }
}

impl GeneratorOptions {
    pub fn with_named_areas(mut self, enabled: bool) -> Self {
        self.named_areas = enabled;
        self
    }

    pub fn with_format(mut self, format: CssFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    Css,
    Html,
}

impl ExportKind {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Css => "grid-styles.css",
            Self::Html => "grid-layout.html",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Generated text handed to the download/clipboard collaborator verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub kind: ExportKind,
    pub file_name: &'static str,
    pub contents: String,
}
