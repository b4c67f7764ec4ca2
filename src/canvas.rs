//! Logical canvas on a differently sized panel.

use embedded_graphics::{prelude::*, primitives::Rectangle};

/// Presents a `logical` sized canvas and scales every coordinate onto the
/// wrapped target. Rectangle fills stay single rectangle fills.
pub struct FitWidth<'a, D> {
    target: &'a mut D,
    logical: Size,
}

impl<'a, D> FitWidth<'a, D>
where
    D: DrawTarget,
{
    pub fn new(target: &'a mut D, logical: Size) -> Self {
        Self { target, logical }
    }

    fn scale(v: i32, physical: u32, logical: u32) -> i32 {
        if logical == 0 {
            return v;
        }
        (i64::from(v) * i64::from(physical) / i64::from(logical)) as i32
    }

    fn map_point(&self, p: Point) -> Point {
        let physical = self.target.bounding_box().size;
        Point::new(
            Self::scale(p.x, physical.width, self.logical.width),
            Self::scale(p.y, physical.height, self.logical.height),
        )
    }

    fn map_rect(&self, area: &Rectangle) -> Rectangle {
        let top_left = self.map_point(area.top_left);
        let end = self.map_point(area.top_left + area.size);
        // Never let a visible rectangle collapse to nothing.
        let width = (end.x - top_left.x).max(i32::from(area.size.width > 0));
        let height = (end.y - top_left.y).max(i32::from(area.size.height > 0));
        Rectangle::new(top_left, Size::new(width as u32, height as u32))
    }
}

impl<D> DrawTarget for FitWidth<'_, D>
where
    D: DrawTarget,
{
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let physical = self.target.bounding_box().size;
        let logical = self.logical;
        self.target.draw_iter(pixels.into_iter().map(|Pixel(p, color)| {
            let x = Self::scale(p.x, physical.width, logical.width);
            let y = Self::scale(p.y, physical.height, logical.height);
            Pixel(Point::new(x, y), color)
        }))
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let mapped = self.map_rect(area);
        self.target.fill_solid(&mapped, color)
    }
}

impl<D> OriginDimensions for FitWidth<'_, D> {
    fn size(&self) -> Size {
        self.logical
    }
}
