//! Resizing and moving a window while leaving its stacking order alone.

use tracing::{debug, info};

use crate::{Desktop, Rect, Result, WindowHandle};

/// Largest width or height accepted, in pixels.
pub const MAX_EXTENT: i32 = 32_767;
/// Smallest x or y accepted.
pub const MIN_COORDINATE: i32 = -32_768;
/// Largest x or y accepted.
pub const MAX_COORDINATE: i32 = 32_767;

/// Rejected user-supplied geometry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("{field} must be a positive integer, got {value}")]
    NotPositive { field: &'static str, value: i32 },

    #[error("{field} must be a valid integer, got '{input}'")]
    NotAnInteger { field: &'static str, input: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// A requested change to a window's rectangle.
///
/// Absent fields mean "leave unchanged" and are filled in from the
/// window's current rectangle when the request is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeometryRequest {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl GeometryRequest {
    /// A request that only changes the size.
    pub fn size(width: i32, height: i32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Returns whether every field is absent.
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.x.is_none() && self.y.is_none()
    }

    /// Parses the four fields from user input.
    ///
    /// Blank input leaves the field absent; anything else must be an
    /// integer. Range checks are done by [`validate`](Self::validate).
    pub fn parse(
        width: &str,
        height: &str,
        x: &str,
        y: &str,
    ) -> std::result::Result<Self, GeometryError> {
        Ok(Self {
            width: parse_field("width", width)?,
            height: parse_field("height", height)?,
            x: parse_field("x", x)?,
            y: parse_field("y", y)?,
        })
    }

    /// Checks every present field against the range Win32 accepts.
    ///
    /// Width and height must be positive and at most [`MAX_EXTENT`].
    /// Positions may be negative: monitors left of or above the primary
    /// one have negative coordinates.
    pub fn validate(&self) -> std::result::Result<(), GeometryError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if let Some(value) = value {
                if value <= 0 {
                    return Err(GeometryError::NotPositive { field, value });
                }
                check_range(field, value, 1, MAX_EXTENT)?;
            }
        }
        for (field, value) in [("x", self.x), ("y", self.y)] {
            if let Some(value) = value {
                check_range(field, value, MIN_COORDINATE, MAX_COORDINATE)?;
            }
        }
        Ok(())
    }

    /// Fills absent fields from `current`.
    pub fn resolve(&self, current: Rect) -> Rect {
        Rect::new(
            self.x.unwrap_or(current.x),
            self.y.unwrap_or(current.y),
            self.width.unwrap_or(current.width),
            self.height.unwrap_or(current.height),
        )
    }
}

fn check_range(
    field: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> std::result::Result<(), GeometryError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(GeometryError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn parse_field(
    field: &'static str,
    input: &str,
) -> std::result::Result<Option<i32>, GeometryError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| GeometryError::NotAnInteger {
            field,
            input: input.to_string(),
        })
}

/// Returns the window's current rectangle.
pub fn current_rect(desktop: &dyn Desktop, handle: WindowHandle) -> Result<Rect> {
    desktop.rect(handle)
}

/// Applies `request` to the window and returns the resulting rectangle.
///
/// The request is validated before any OS call. When the resolved
/// rectangle equals the current one, nothing is sent to the OS.
pub fn apply(
    desktop: &dyn Desktop,
    handle: WindowHandle,
    request: &GeometryRequest,
) -> Result<Rect> {
    request.validate()?;

    let current = desktop.rect(handle)?;
    let target = request.resolve(current);
    if target == current {
        debug!(%handle, rect = %current, "geometry unchanged, skipping");
        return Ok(current);
    }

    desktop.set_rect(handle, &target)?;
    info!(%handle, from = %current, to = %target, "window geometry applied");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::fake::{FakeDesktop, FakeWindow};

    const START: Rect = Rect {
        x: 120,
        y: 80,
        width: 1024,
        height: 768,
    };

    fn desktop() -> FakeDesktop {
        FakeDesktop::new()
            .with_process(10, "notepad.exe")
            .with_window(FakeWindow::new(1, "Notes", 10).with_rect(START))
    }

    #[test]
    fn empty_request_is_a_no_op() {
        // Arrange
        let desktop = desktop();

        // Act
        let result = apply(&desktop, WindowHandle(1), &GeometryRequest::default()).unwrap();

        // Assert
        assert_eq!(result, START);
        assert_eq!(desktop.rect(WindowHandle(1)).unwrap(), START);
        assert_eq!(desktop.set_calls(), 0);
    }

    #[test]
    fn size_only_request_keeps_position() {
        // Arrange
        let desktop = desktop();

        // Act
        let result = apply(&desktop, WindowHandle(1), &GeometryRequest::size(800, 600)).unwrap();

        // Assert
        assert_eq!(result, Rect::new(120, 80, 800, 600));
        assert_eq!(desktop.rect(WindowHandle(1)).unwrap(), result);
        assert_eq!(desktop.set_calls(), 1);
    }

    #[test]
    fn position_only_request_keeps_size() {
        // Arrange
        let desktop = desktop();
        let request = GeometryRequest {
            x: Some(-1920),
            y: Some(0),
            ..GeometryRequest::default()
        };

        // Act
        let result = apply(&desktop, WindowHandle(1), &request).unwrap();

        // Assert
        assert_eq!(result, Rect::new(-1920, 0, 1024, 768));
    }

    #[test]
    fn invalid_request_never_reaches_the_os() {
        // Arrange
        let desktop = desktop();
        let request = GeometryRequest {
            width: Some(0),
            ..GeometryRequest::default()
        };

        // Act
        let result = apply(&desktop, WindowHandle(1), &request);

        // Assert
        assert!(matches!(
            result,
            Err(Error::InvalidGeometry(GeometryError::NotPositive {
                field: "width",
                value: 0
            }))
        ));
        assert_eq!(desktop.set_calls(), 0);
        assert_eq!(desktop.rect(WindowHandle(1)).unwrap(), START);
    }

    #[test]
    fn denied_mutation_leaves_window_unchanged() {
        // Arrange
        let desktop = desktop().denying(1);

        // Act
        let result = apply(&desktop, WindowHandle(1), &GeometryRequest::size(800, 600));

        // Assert
        assert!(matches!(result, Err(Error::AccessDenied(WindowHandle(1)))));
        assert_eq!(desktop.rect(WindowHandle(1)).unwrap(), START);
    }

    #[test]
    fn stale_handle_is_reported() {
        // Arrange
        let desktop = desktop();
        desktop.destroy(1);

        // Act
        let result = apply(&desktop, WindowHandle(1), &GeometryRequest::size(800, 600));

        // Assert
        assert!(matches!(result, Err(Error::StaleHandle(WindowHandle(1)))));
    }

    #[test]
    fn parse_treats_blank_as_absent() {
        // Act
        let request = GeometryRequest::parse(" 800 ", "", "-10", "  ").unwrap();

        // Assert
        assert_eq!(
            request,
            GeometryRequest {
                width: Some(800),
                height: None,
                x: Some(-10),
                y: None,
            }
        );
        assert!(GeometryRequest::parse("", "", "", "").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_non_integers() {
        let result = GeometryRequest::parse("800", "tall", "", "");

        assert_eq!(
            result,
            Err(GeometryError::NotAnInteger {
                field: "height",
                input: "tall".into()
            })
        );
    }

    #[test]
    fn validate_rejects_negative_height() {
        let request = GeometryRequest::size(640, -1);

        assert_eq!(
            request.validate(),
            Err(GeometryError::NotPositive {
                field: "height",
                value: -1
            })
        );
    }

    #[test]
    fn validate_accepts_both_ends_of_each_range() {
        let smallest = GeometryRequest {
            width: Some(1),
            height: Some(1),
            x: Some(MIN_COORDINATE),
            y: Some(MIN_COORDINATE),
        };
        let largest = GeometryRequest {
            width: Some(MAX_EXTENT),
            height: Some(MAX_EXTENT),
            x: Some(MAX_COORDINATE),
            y: Some(MAX_COORDINATE),
        };

        assert_eq!(smallest.validate(), Ok(()));
        assert_eq!(largest.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_sizes_past_the_maximum() {
        let request = GeometryRequest::size(640, MAX_EXTENT + 1);

        assert_eq!(
            request.validate(),
            Err(GeometryError::OutOfRange {
                field: "height",
                value: 32_768,
                min: 1,
                max: MAX_EXTENT
            })
        );
    }

    #[test]
    fn validate_rejects_positions_outside_the_coordinate_space() {
        let below = GeometryRequest {
            x: Some(MIN_COORDINATE - 1),
            ..GeometryRequest::default()
        };
        let above = GeometryRequest {
            y: Some(MAX_COORDINATE + 1),
            ..GeometryRequest::default()
        };

        assert!(matches!(
            below.validate(),
            Err(GeometryError::OutOfRange { field: "x", value: -32_769, .. })
        ));
        assert!(matches!(
            above.validate(),
            Err(GeometryError::OutOfRange { field: "y", value: 32_768, .. })
        ));
    }

    #[test]
    fn extreme_request_never_reaches_the_os() {
        // Arrange
        let desktop = desktop();
        let request = GeometryRequest {
            width: Some(i32::MAX),
            height: Some(i32::MAX),
            x: Some(i32::MIN),
            y: None,
        };

        // Act
        let result = apply(&desktop, WindowHandle(1), &request);

        // Assert
        assert!(matches!(
            result,
            Err(Error::InvalidGeometry(GeometryError::OutOfRange {
                field: "width",
                ..
            }))
        ));
        assert_eq!(desktop.set_calls(), 0);
        assert_eq!(desktop.rect(WindowHandle(1)).unwrap(), START);
    }
}
