use geo::Point;
use serde::{Deserialize, Serialize};

/// rectangular plausibility region in degrees, x as longitude and y as latitude.
/// bounds are inclusive.
#[derive(Clone, Debug, Serialize, Deserialize, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Default for BoundingBox {
    /// the New York City metro region.
    fn default() -> Self {
        Self {
            xmin: -74.3,
            xmax: -73.7,
            ymin: 40.5,
            ymax: 40.9,
        }
    }
}

impl BoundingBox {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        self.xmin <= longitude
            && longitude <= self.xmax
            && self.ymin <= latitude
            && latitude <= self.ymax
    }

    pub fn contains_point(&self, point: &Point<f64>) -> bool {
        self.contains(point.x(), point.y())
    }

    /// the point of the box nearest to `point`.
    pub fn clamp(&self, point: &Point<f64>) -> Point<f64> {
        Point::new(
            point.x().max(self.xmin).min(self.xmax),
            point.y().max(self.ymin).min(self.ymax),
        )
    }

    /// checks that both axes are ordered, finite and non-empty.
    pub fn validate(&self) -> Result<(), String> {
        let finite = [self.xmin, self.xmax, self.ymin, self.ymax]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            Err(format!("bbox [{self}] has a non-finite bound"))
        } else if self.xmin >= self.xmax {
            Err(format!("bbox [{self}] must have xmin < xmax"))
        } else if self.ymin >= self.ymax {
            Err(format!("bbox [{self}] must have ymin < ymax"))
        } else {
            Ok(())
        }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.xmin, self.xmax, self.ymin, self.ymax)
    }
}

/// parses a bounding box from the command line as "xmin,xmax,ymin,ymax".
pub fn parse_bbox(s: &str) -> Result<BoundingBox, String> {
    let values = s
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| format!("bbox value '{v}' is not a number"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let [xmin, xmax, ymin, ymax] = values[..] else {
        return Err(format!(
            "expected 4 values as xmin,xmax,ymin,ymax, found {} in '{s}'",
            values.len()
        ));
    };
    if !(-180.0..=180.0).contains(&xmin) || !(-180.0..=180.0).contains(&xmax) {
        return Err(format!("bbox longitudes must be within [-180,180], found '{s}'"));
    }
    if !(-90.0..=90.0).contains(&ymin) || !(-90.0..=90.0).contains(&ymax) {
        return Err(format!("bbox latitudes must be within [-90,90], found '{s}'"));
    }
    let bbox = BoundingBox::new(xmin, xmax, ymin, ymax);
    bbox.validate()?;
    Ok(bbox)
}

#[cfg(test)]
mod tests {
    use super::{parse_bbox, BoundingBox};
    use geo::Point;

    #[test]
    fn test_bounds_are_inclusive() {
        let bbox = BoundingBox::default();
        assert!(bbox.contains(-74.3, 40.5));
        assert!(bbox.contains(-73.7, 40.9));
        assert!(bbox.contains(-74.1745, 40.6895));
        assert!(!bbox.contains(-75.0, 40.7));
        assert!(!bbox.contains(-73.9, 40.95));
    }

    #[test]
    fn test_parse_bbox() {
        let bbox = parse_bbox("-105.254,-105.197,39.733,39.784").expect("valid bbox");
        assert_eq!(bbox, BoundingBox::new(-105.254, -105.197, 39.733, 39.784));
        assert_eq!(bbox.to_string(), "-105.254,-105.197,39.733,39.784");
    }

    #[test]
    fn test_parse_bbox_errors() {
        assert!(parse_bbox("-74.3,-73.7,40.5").is_err());
        assert!(parse_bbox("-73.7,-74.3,40.5,40.9").is_err());
        assert!(parse_bbox("-74.3,-73.7,40.9,40.5").is_err());
        assert!(parse_bbox("-74.3,-73.7,40.5,north").is_err());
        assert!(parse_bbox("-200,-73.7,40.5,40.9").is_err());
        assert!(parse_bbox("-74.3,-73.7,40.5,NaN").is_err());
    }

    #[test]
    fn test_clamp_and_validate() {
        let bbox = BoundingBox::default();
        let p = bbox.clamp(&Point::new(-73.95, 40.9438));
        assert_eq!((p.x(), p.y()), (-73.95, 40.9));
        let p = bbox.clamp(&Point::new(-75.0, 40.1));
        assert_eq!((p.x(), p.y()), (-74.3, 40.5));
        assert!(bbox.validate().is_ok());
        assert!(BoundingBox::new(-73.7, -74.3, 40.5, 40.9).validate().is_err());
        assert!(BoundingBox::new(-74.3, -73.7, 40.5, 40.5).validate().is_err());
    }
}
