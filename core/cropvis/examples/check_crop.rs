//! Classify a handful of faces and OCR regions against a crop edit.
//!
//! Usage:
//!   RUST_LOG=cropvis=trace cargo run --example check_crop

use cropvis::{EditAction, FaceRecord, ImageDimensions, OcrRecord, VisibilityChecker};
use tracing_subscriber::EnvFilter;

const FACES: &str = r#"[
    {"id": "left", "assetId": "a1", "boundingBoxX1": 100, "boundingBoxY1": 100,
     "boundingBoxX2": 200, "boundingBoxY2": 200, "imageWidth": 1000, "imageHeight": 1000},
    {"id": "thumb", "assetId": "a1", "boundingBoxX1": 150, "boundingBoxY1": 150,
     "boundingBoxX2": 200, "boundingBoxY2": 200, "imageWidth": 500, "imageHeight": 500,
     "sourceType": "manual"}
]"#;

const OCR: &str = r#"[
    {"id": "title", "assetId": "a1", "x1": 0.3, "y1": 0.3, "x2": 0.5, "y2": 0.3,
     "x3": 0.5, "y3": 0.35, "x4": 0.3, "y4": 0.35, "boxScore": 0.97, "textScore": 0.91,
     "text": "Hello"},
    {"id": "footer", "assetId": "a1", "x1": 0.1, "y1": 0.9, "x2": 0.4, "y2": 0.92,
     "x3": 0.4, "y3": 0.97, "x4": 0.1, "y4": 0.95, "boxScore": 0.88, "textScore": 0.7,
     "text": "page 1"}
]"#;

const EDITS: &str = r#"[
    {"action": "rotate", "parameters": {"angle": 0}},
    {"action": "crop", "parameters": {"x": 160, "y": 100, "width": 600, "height": 600}}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let faces: Vec<FaceRecord> = serde_json::from_str(FACES)?;
    let regions: Vec<OcrRecord> = serde_json::from_str(OCR)?;
    let edits: Vec<EditAction> = serde_json::from_str(EDITS)?;
    let dims = ImageDimensions::try_new(1000.0, 1000.0)?;

    let checker = VisibilityChecker::new().crop_from_actions(&edits);

    let faces = checker.faces(&faces, dims)?;
    for face in &faces.visible {
        println!("face {:>8}: visible", face.id);
    }
    for face in &faces.hidden {
        println!("face {:>8}: hidden", face.id);
    }

    let regions = checker.ocr(&regions, dims)?;
    for region in &regions.visible {
        println!("text {:>8}: visible ({:?})", region.id, region.text);
    }
    for region in &regions.hidden {
        println!("text {:>8}: hidden ({:?})", region.id, region.text);
    }

    Ok(())
}
