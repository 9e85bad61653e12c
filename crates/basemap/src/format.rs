use serde::Deserialize;

/// World-outline polygons in lon/lat degrees, loaded once per session.
///
/// This is the boundary type handed to the renderer; it is never mutated
/// after load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonSet {
    pub features: Vec<PolygonFeature>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonFeature {
    pub name: Option<String>,
    /// Outer ring first, then holes; vertices are `[lon, lat]` degrees.
    pub rings: Vec<Vec<[f64; 2]>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasemapError {
    Parse(String),
    UnsupportedGeometry(String),
    Empty,
}

impl std::fmt::Display for BasemapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BasemapError::Parse(msg) => write!(f, "basemap parse error: {msg}"),
            BasemapError::UnsupportedGeometry(kind) => {
                write!(f, "unsupported geometry type: {kind}")
            }
            BasemapError::Empty => write!(f, "basemap contains no polygon features"),
        }
    }
}

impl std::error::Error for BasemapError {}

#[derive(Deserialize)]
struct RawCollection {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<RawProperties>,
    geometry: RawGeometry,
}

#[derive(Deserialize)]
struct RawProperties {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: serde_json::Value,
}

/// Parse the GeoJSON subset we consume: a `FeatureCollection` of `Polygon`
/// and `MultiPolygon` features. Anything else is a descriptive error, not
/// a silent skip, so a mis-exported dataset is caught at load time.
pub fn parse_polygon_set(json: &str) -> Result<PolygonSet, BasemapError> {
    let raw: RawCollection =
        serde_json::from_str(json).map_err(|e| BasemapError::Parse(e.to_string()))?;

    let mut features = Vec::with_capacity(raw.features.len());
    for feature in raw.features {
        let name = feature.properties.and_then(|p| p.name);
        match feature.geometry.kind.as_str() {
            "Polygon" => {
                let rings: Vec<Vec<[f64; 2]>> =
                    serde_json::from_value(feature.geometry.coordinates)
                        .map_err(|e| BasemapError::Parse(e.to_string()))?;
                features.push(PolygonFeature { name, rings });
            }
            "MultiPolygon" => {
                let polygons: Vec<Vec<Vec<[f64; 2]>>> =
                    serde_json::from_value(feature.geometry.coordinates)
                        .map_err(|e| BasemapError::Parse(e.to_string()))?;
                for rings in polygons {
                    features.push(PolygonFeature {
                        name: name.clone(),
                        rings,
                    });
                }
            }
            other => return Err(BasemapError::UnsupportedGeometry(other.to_string())),
        }
    }

    if features.is_empty() {
        return Err(BasemapError::Empty);
    }
    Ok(PolygonSet { features })
}
