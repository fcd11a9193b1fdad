use crate::constants::{
    MILLIMETERS_PER_INCH, PRINTABLE_TOLERANCE_IN, ZOOM_MAX_RATIO, ZOOM_MIN_RATIO,
};
use crate::units::{Unit, UnitConversion};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("Missing geography: {0}")]
    MissingGeography(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Sheet the layout is printed on
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    Letter,
    Legal,
    Tabloid,
    Custom { width_in: f64, height_in: f64 },
}

impl PaperSize {
    /// Sheet size in inches, as given by the standard
    pub fn size_in(self) -> (f64, f64) {
        let iso = |w_mm: f64, h_mm: f64| {
            (w_mm / MILLIMETERS_PER_INCH, h_mm / MILLIMETERS_PER_INCH)
        };
        match self {
            PaperSize::A3 => iso(297.0, 420.0),
            PaperSize::A4 => iso(210.0, 297.0),
            PaperSize::Letter => (8.5, 11.0),
            PaperSize::Legal => (8.5, 14.0),
            PaperSize::Tabloid => (11.0, 17.0),
            PaperSize::Custom {
                width_in,
                height_in,
            } => (width_in, height_in),
        }
    }
}

/// Margins in inches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMargins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

impl PageMargins {
    pub fn uniform(margin: f64) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }
}

/// Printed page: the sheet, which way up it is, and the margins map items
/// must stay inside
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSetup {
    pub paper: PaperSize,
    pub orientation: Orientation,
    pub margins: PageMargins,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            paper: PaperSize::A4,
            orientation: Orientation::Portrait,
            margins: PageMargins::default(),
        }
    }
}

impl PageSetup {
    /// Whole page in inches, origin at the top-left corner.
    ///
    /// Orientation decides which side is the long one, whatever order the
    /// sheet size was given in.
    pub fn page_rect(&self) -> Rect {
        let (a, b) = self.paper.size_in();
        let (short, long) = (a.min(b), a.max(b));
        match self.orientation {
            Orientation::Portrait => Rect::new(0.0, 0.0, short, long),
            Orientation::Landscape => Rect::new(0.0, 0.0, long, short),
        }
    }

    /// Area inside the margins
    pub fn printable_rect(&self) -> Rect {
        let page = self.page_rect();
        let m = &self.margins;
        Rect::new(
            m.left,
            m.top,
            page.width - m.left - m.right,
            page.height - m.top - m.bottom,
        )
    }

    /// True when `rect` lies inside the margins
    pub fn fits(&self, rect: &Rect) -> bool {
        self.printable_rect()
            .contains_rect(&rect.normalized(), PRINTABLE_TOLERANCE_IN)
    }
}

/// An axis-aligned rectangle in paper space (inches) or device pixels.
///
/// The origin is the top-left corner and y grows downward, like the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    /// Width (negative while a drag is still being constructed)
    pub width: f64,
    /// Height (negative while a drag is still being constructed)
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Same rectangle with non-negative extents.
    ///
    /// A rectangle dragged up or to the left has a negative width or height;
    /// the origin moves to the opposite corner so the covered area is kept.
    pub fn normalized(&self) -> Rect {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Rect::new(x, y, width, height)
    }

    /// True when the rectangle has no usable area
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width.abs() <= f64::EPSILON
            || self.height.abs() <= f64::EPSILON
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Check whether `other` lies inside this rectangle, allowing `tolerance`
    pub fn contains_rect(&self, other: &Rect, tolerance: f64) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }
}

/// A point in paper space (inches from the page's top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaperPoint {
    pub x: f64,
    pub y: f64,
}

impl PaperPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in map space (easting, northing in map units)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPoint {
    pub easting: f64,
    pub northing: f64,
}

impl MapPoint {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }
}

/// Ratio of a length on paper to the same length on the ground.
///
/// This is the fraction `1/N` of a "1:N" map scale, never `N` itself.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Scale(f64);

impl Scale {
    /// Returns `None` unless `value` is finite and strictly positive
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// Scale for a "1:N" denominator
    pub fn from_denominator(denominator: f64) -> Option<Self> {
        Self::new(1.0 / denominator)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// The `N` of "1:N"
    pub fn denominator(self) -> f64 {
        1.0 / self.0
    }

    /// Ground distance in `map_unit` covered by `value` page units.
    ///
    /// With `value = 1` this is the "1 inch = X feet" form of the scale.
    pub fn ground_distance(
        self,
        conv: &UnitConversion,
        value: f64,
        page_unit: Unit,
        map_unit: Unit,
    ) -> f64 {
        let paper_in = conv.convert_units(value, page_unit, Unit::Inch);
        conv.convert_units(paper_in / self.0, Unit::Inch, map_unit)
    }

    /// Paper length in `page_unit` that covers `value` ground units
    pub fn paper_distance(
        self,
        conv: &UnitConversion,
        value: f64,
        map_unit: Unit,
        page_unit: Unit,
    ) -> f64 {
        let ground_in = conv.convert_units(value, map_unit, Unit::Inch);
        conv.convert_units(ground_in * self.0, Unit::Inch, page_unit)
    }

    /// Whether an interactive zoom from this scale to `next` is accepted.
    ///
    /// Zoom steps that change the scale by more than a factor of ten, or
    /// shrink it below a fifth, are discarded.
    pub fn accepts_zoom_to(self, next: Scale) -> bool {
        let ratio = next.0 / self.0;
        (ZOOM_MIN_RATIO..=ZOOM_MAX_RATIO).contains(&ratio)
    }
}

impl TryFrom<f64> for Scale {
    type Error = LayoutError;

    fn try_from(value: f64) -> Result<Self> {
        Scale::new(value).ok_or_else(|| LayoutError::Config(format!("Invalid scale: {}", value)))
    }
}

impl From<Scale> for f64 {
    fn from(scale: Scale) -> f64 {
        scale.0
    }
}
