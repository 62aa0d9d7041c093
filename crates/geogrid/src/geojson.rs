//! GeoJSON export
//!
//! Rows are placed with the columns [`Grid::geo_columns`] picks. Coordinate
//! pairs give `Point` features; place columns give features without geometry
//! that carry the place code, for joining against boundary data downstream.

use std::collections::HashSet;

use serde_json::{json, Map, Value};

use geogrid_core::{ColumnId, ColumnType, GeoColumns, Grid, Row};

/// Property holding the matched place code
pub const PLACE_CODE: &str = "code";

/// Build a `FeatureCollection` from the body rows
///
/// Rows whose coordinates are missing, unreadable or out of range are left
/// out, as are rows whose place is unknown. Properties carry the effective
/// values of the remaining columns keyed by header text.
pub fn to_feature_collection(grid: &Grid) -> Value {
    let features = match grid.geo_columns() {
        Some(GeoColumns::Coordinates {
            lon: Some(lon),
            lat: Some(lat),
        })
        | Some(GeoColumns::DmsCoordinates {
            lon: Some(lon),
            lat: Some(lat),
        }) => point_features(grid, lon, lat),
        Some(GeoColumns::Place(column)) => place_features(grid, column),
        Some(incomplete) => {
            tracing::warn!(?incomplete, "coordinate pair is incomplete, no features");
            Vec::new()
        }
        None => {
            tracing::warn!("no geographic column, no features");
            Vec::new()
        }
    };

    tracing::debug!(features = features.len(), "built feature collection");
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn point_features(grid: &Grid, lon: ColumnId, lat: ColumnId) -> Vec<Value> {
    let keys = property_keys(grid, &[lon, lat], &[]);
    grid.body()
        .filter_map(|row| {
            let x = coordinate(grid, row, lon, 180.0)?;
            let y = coordinate(grid, row, lat, 90.0)?;
            Some(feature(
                json!({ "type": "Point", "coordinates": [x, y] }),
                properties(row, &keys),
            ))
        })
        .collect()
}

fn place_features(grid: &Grid, column: ColumnId) -> Vec<Value> {
    let keys = property_keys(grid, &[column], &[PLACE_CODE]);
    grid.body()
        .filter_map(|row| {
            let place = row
                .cell(column)?
                .post_processed(ColumnType::Geo, grid.dictionary())?
                .as_place()?
                .code
                .clone();
            let mut props = properties(row, &keys);
            props.insert(PLACE_CODE.to_string(), Value::String(place));
            Some(feature(Value::Null, props))
        })
        .collect()
}

fn coordinate(grid: &Grid, row: &Row, column: ColumnId, bound: f64) -> Option<f64> {
    let column_type = grid.column_view(column)?.column_type();
    let value = row
        .cell(column)?
        .post_processed(column_type, grid.dictionary())?
        .as_number()?;
    (value.is_finite() && value.abs() <= bound).then_some(value)
}

/// Property name per column, header text first
///
/// Columns without a header use their id. A header already taken by an
/// earlier column, or by a `reserved` property, gets the column id appended.
fn property_keys(grid: &Grid, skip: &[ColumnId], reserved: &[&str]) -> Vec<(ColumnId, String)> {
    let mut taken: HashSet<String> = reserved.iter().map(|key| key.to_string()).collect();
    let mut keys = Vec::new();
    for view in grid.column_views().filter(|v| !skip.contains(&v.id())) {
        let mut key = match view.title().trim() {
            "" => view.id().to_string(),
            title => title.to_string(),
        };
        if taken.contains(&key) {
            let renamed = format!("{}_{}", key, view.id());
            tracing::warn!(header = %key, property = %renamed, "duplicate property name");
            key = renamed;
        }
        taken.insert(key.clone());
        keys.push((view.id(), key));
    }
    keys
}

fn properties(row: &Row, keys: &[(ColumnId, String)]) -> Map<String, Value> {
    keys.iter()
        .filter_map(|(id, key)| {
            let value = row.cell(*id)?.effective_value();
            Some((key.clone(), Value::String(value.to_string())))
        })
        .collect()
}

fn feature(geometry: Value, properties: Map<String, Value>) -> Value {
    json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": properties,
    })
}
