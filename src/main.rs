use terrascope::{
    encode_png, has_valid_data, ArtifactStore, Config, ImageRequest, ImageryProvider, Polygon,
    Result, SentinelHubClient,
};

/// Demo land parcel near Guna, Madhya Pradesh
const DEMO_LAND: [[f64; 2]; 5] = [
    [76.950903, 24.521356],
    [76.947041, 24.5155],
    [76.95262, 24.510892],
    [76.954508, 24.517608],
    [76.950903, 24.521356],
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    println!("terrascope - land imagery fetch\n");

    let config = Config::from_env()?;
    let client = SentinelHubClient::new(config.credentials, config.endpoints);
    let artifacts = ArtifactStore::new(&config.output_dir)?;

    let polygon = Polygon::from_pairs(&DEMO_LAND)?;
    let bbox = polygon.bounding_box();
    let (width, height) = bbox.extent();
    println!("Bounding box: {:?}", bbox.to_array());
    println!("Extent: {:.6} x {:.6} degrees", width, height);

    let request = ImageRequest::true_color(bbox);
    println!("Requesting image for your land...");

    match client.fetch_image(&request).await {
        Ok(image) => {
            if has_valid_data(&image) {
                let png = encode_png(&image)?;
                let path = artifacts.write(&png)?;
                println!("✅ Image saved: {}", path.display());
            } else {
                println!("⚪ No valid data (area might be dark/cloudy). Try another date.");
            }
        }
        Err(e) => eprintln!("❌ Error fetching image: {}", e),
    }

    Ok(())
}
