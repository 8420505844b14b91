use geojson_model::equal::{feature_collection_equal, geojson_equal};
use geojson_model::{GeoJson, GeoJsonObject, StructHash};
use serde_json::{json, Value};

fn parse(doc: Value) -> GeoJson {
    GeoJson::from_json(&doc).expect("fixture must decode")
}

fn feature(properties: Value, id: Value) -> GeoJson {
    parse(json!({
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
        "properties": properties,
        "id": id
    }))
}

#[test]
fn equality_matrix_property_values_do_not_matter() {
    let a = feature(json!({"name": "x", "rank": 1}), json!(7));
    let b = feature(json!({"name": "y", "rank": [1, 2, 3]}), json!(7));
    assert_eq!(a, b);
    assert!(geojson_equal(&a, &b));
    assert_eq!(a.struct_hash(), b.struct_hash());
}

#[test]
fn equality_matrix_property_key_order_matters() {
    let a = feature(json!({"name": "x", "rank": 1}), json!(7));
    let b = feature(json!({"rank": 1, "name": "x"}), json!(7));
    assert_ne!(a, b);

    let empty = feature(json!({}), json!(7));
    let null = feature(json!(null), json!(7));
    assert_eq!(empty, null);
}

#[test]
fn equality_matrix_id_kind_and_value() {
    let base = feature(json!({}), json!(7));
    assert_eq!(base, feature(json!({}), json!(7)));
    assert_ne!(base, feature(json!({}), json!(8)));
    assert_ne!(base, feature(json!({}), json!("7")));
    assert_ne!(base, feature(json!({}), json!(7.0)));
    assert_ne!(base, feature(json!({}), json!(null)));
    assert_eq!(feature(json!({}), json!(null)), feature(json!({}), json!(null)));
}

#[test]
fn equality_matrix_geometry_members() {
    let square = |z: Option<f64>| {
        let ring: Vec<Value> = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]
            .iter()
            .map(|[x, y]| match z {
                Some(z) => json!([x, y, z]),
                None => json!([x, y]),
            })
            .collect();
        parse(json!({"type": "Polygon", "coordinates": [ring]}))
    };
    assert_eq!(square(None), square(None));
    assert_ne!(square(None), square(Some(0.0)));
    assert_ne!(square(Some(0.0)), square(Some(1.0)));

    let boxed = parse(json!({
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
        "bbox": [0.0, 0.0, 1.0, 1.0]
    }));
    assert_ne!(square(None), boxed);
}

#[test]
fn equality_matrix_same_coordinates_different_discriminator() {
    let mp = parse(json!({"type": "MultiPoint", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}));
    let ls = parse(json!({"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}));
    assert_ne!(mp, ls);
    assert_ne!(mp.struct_hash(), ls.struct_hash());
}

#[test]
fn equality_matrix_collections_compare_in_order() {
    let p = json!({"type": "Point", "coordinates": [0.0, 0.0]});
    let q = json!({"type": "Point", "coordinates": [1.0, 1.0]});
    let gc = |items: Vec<Value>| parse(json!({"type": "GeometryCollection", "geometries": items}));
    assert_eq!(gc(vec![p.clone(), q.clone()]), gc(vec![p.clone(), q.clone()]));
    assert_ne!(gc(vec![p.clone(), q.clone()]), gc(vec![q.clone(), p.clone()]));
    assert_ne!(gc(vec![p.clone()]), gc(vec![p.clone(), p.clone()]));

    let fc = |names: &[&str]| {
        let features: Vec<Value> = names
            .iter()
            .map(|n| json!({"type": "Feature", "geometry": null, "properties": {n.to_string(): 1}}))
            .collect();
        parse(json!({"type": "FeatureCollection", "features": features}))
    };
    let (a, b) = (fc(&["a", "b"]), fc(&["a", "b"]));
    assert!(feature_collection_equal(
        a.as_feature_collection().expect("collection"),
        b.as_feature_collection().expect("collection"),
    ));
    assert_ne!(fc(&["a", "b"]), fc(&["b", "a"]));
}
