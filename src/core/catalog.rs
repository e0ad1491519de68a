//! Built-in catalog for the resort illustrated map.
//!
//! Geometry comes from the layered artwork export; the URL table points at the
//! hosted PNGs for each layer, keyed by layer name with spaces replaced by
//! underscores.

use crate::layers::{clouds::CloudRecord, spec::LayerRecord};

/// Remote hover click sound.
pub const HOVER_SOUND_URL: &str =
    "https://res.cloudinary.com/dukaroz3u/video/upload/v1752944346/click-button-131479_glstzg.mp3";

/// Layers that are drawn as inert background planes.
pub const NON_INTERACTIVE_LAYER_NAMES: &[&str] = &[
    "BG",
    "Surface",
    "Walkway",
    "Roads buggy",
    "Tree copy 56",
    "Map Ledgend",
    "Entrance",
];

pub const BUILDING_LAYER_NAMES: &[&str] = &[
    "Male Staff Quarters",
    "Terrace",
    "Gym",
    "Dream villa",
    "Grand hall",
    "Prayer room",
    "Big Kitchen",
    "Garden restaurant",
    "Spice Restaurant",
    "New Kitchen",
    "Split ",
    "Store",
    "Generator",
    "owners cabin",
    "Billiard Room",
    "Duplex Villa",
    "Eco Cabin",
    "Mud House",
    "Mid House 2",
    "Water villas",
    "Tower Building",
    "Green Cabins",
    "Laundry",
    "Cow Farm",
    "Female Staff Quarters",
    "Hatchery",
    "Reception",
    "Twin Cabin",
    "Dream House",
];

pub const FEATURE_LAYER_NAMES: &[&str] = &[
    "Big Pools Area",
    "Small Swimming",
    "Boats",
    "Cricket Field",
    "Kids playground",
    "Amphi theatre",
    "Agri  fields",
    "Agri  field 2",
    "Agri  field 3",
    "Football Field",
    "Parrking",
    "Cycle",
];

pub const PATH_LAYER_NAMES: &[&str] = &["Walkway"];

pub const ROAD_LAYER_NAMES: &[&str] = &["Roads buggy"];

/// (index, name, filename, x, y, width, height, opacity)
type RawLayer = (i32, &'static str, &'static str, f64, f64, f64, f64, u8);

const LAYER_TABLE: &[RawLayer] = &[
    (0, "BG", "0_BG.png", 0.0, 0.0, 4001.0, 2250.0, 255),
    (1, "Surface", "1_Surface.png", 634.0, 0.0, 3367.0, 2250.0, 255),
    (2, "Male Staff Quarters", "2_Male_Staff_Quarters.png", 2375.0, 1275.0, 195.0, 114.0, 255),
    (3, "Walkway", "3_Walkway.png", 1680.0, 550.0, 721.0, 1326.0, 255),
    (4, "Roads buggy", "4_Roads_buggy.png", 1397.0, 236.0, 1374.0, 1689.0, 255),
    (5, "Terrace", "5_Terrace.png", 1766.0, 1233.0, 77.0, 77.0, 255),
    (6, "Big Pools Area", "6_Big_Pools_Area.png", 2030.0, 294.0, 219.0, 237.0, 255),
    (7, "Gym", "7_Gym.png", 2013.0, 193.0, 225.0, 145.0, 255),
    (8, "Dream villa", "8_Dream_villa.png", 2239.0, 179.0, 170.0, 158.0, 255),
    (9, "Grand hall", "9_Grand_hall.png", 2474.0, 190.0, 172.0, 130.0, 255),
    (10, "Prayer room", "10_Prayer_room.png", 1964.0, 1259.0, 108.0, 92.0, 255),
    (11, "Big Kitchen", "11_Big_Kitchen.png", 1896.0, 1039.0, 98.0, 89.0, 255),
    (12, "Garden restaurant", "12_Garden_restaurant.png", 1940.0, 1087.0, 122.0, 94.0, 255),
    (13, "Spice Restaurant", "13_Spice_Restaurant.png", 1918.0, 1211.0, 122.0, 79.0, 255),
    (14, "New Kitchen", "14_New_Kitchen.png", 1872.0, 1247.0, 103.0, 78.0, 255),
    (15, "Split ", "15_Split_.png", 1794.0, 1280.0, 100.0, 94.0, 255),
    (16, "Store", "16_Store.png", 1908.0, 1295.0, 96.0, 95.0, 255),
    (17, "Generator", "17_Generator.png", 1839.0, 1333.0, 96.0, 77.0, 255),
    (18, "owners cabin", "18_owners_cabin.png", 2030.0, 823.0, 119.0, 101.0, 255),
    (19, "Billiard Room", "19_Billiard_Room.png", 1850.0, 883.0, 100.0, 73.0, 255),
    (20, "Small Swimming", "20_Small_Swimming.png", 2138.0, 863.0, 159.0, 125.0, 255),
    (21, "Boats", "21_Boats.png", 2042.0, 1197.0, 158.0, 113.0, 255),
    (22, "Entrance", "22_Gate.png", 1364.0, 1398.0, 114.0, 112.0, 255),
    (23, "Duplex Villa", "23_Duplex_Villa.png", 1590.0, 692.0, 141.0, 128.0, 255),
    (24, "Eco Cabin", "24_Eco_Cabin.png", 1487.0, 751.0, 135.0, 104.0, 255),
    (25, "Mud House", "25_Mud_House.png", 1479.0, 884.0, 121.0, 104.0, 255),
    (26, "Mid House 2", "26_Mid_House_2.png", 2344.0, 1839.0, 121.0, 104.0, 255),
    (27, "Cricket Field", "27_Cricket_Field.png", 1517.0, 1021.0, 202.0, 200.0, 255),
    (28, "Kids playground", "28_Kids_playground.png", 1725.0, 724.0, 181.0, 130.0, 255),
    (29, "Amphi theatre", "29_Amphi_theatre.png", 2676.0, 458.0, 182.0, 136.0, 255),
    (30, "Water villas", "30_Water_villas.png", 2239.0, 407.0, 239.0, 261.0, 255),
    (31, "Tower Building", "31_Tower_Building.png", 1834.0, 407.0, 85.0, 156.0, 255),
    (32, "Green Cabins", "32_Green_Cabins.png", 1958.0, 460.0, 403.0, 242.0, 255),
    (33, "Agri  fields", "33_Agri__fields.png", 961.0, 597.0, 330.0, 236.0, 255),
    (34, "Agri  field 2", "34_Agri__field_2.png", 2107.0, 1737.0, 155.0, 112.0, 255),
    (35, "Laundry", "35_Laundry.png", 2195.0, 1322.0, 105.0, 84.0, 255),
    (36, "Cow Farm", "36_Cow_Farm.png", 2344.0, 1449.0, 175.0, 125.0, 255),
    (37, "Female Staff Quarters", "37_Female_Staff_Quarters.png", 2252.0, 1358.0, 86.0, 81.0, 255),
    (38, "Agri  field 3", "38_Agri__field_3.png", 2191.0, 1589.0, 106.0, 78.0, 255),
    (39, "Hatchery", "39_Hatchery.png", 2190.0, 1384.0, 100.0, 75.0, 255),
    (40, "Football Field", "40_Football_Field.png", 1551.0, 1322.0, 264.0, 224.0, 255),
    (41, "Parrking", "41_Parrking.png", 1201.0, 1153.0, 205.0, 225.0, 255),
    (42, "Dream House", "42_Layer_8.png", 2179.0, 1839.0, 185.0, 169.0, 255),
    (43, "Reception", "43_Reception.png", 1431.0, 1257.0, 106.0, 86.0, 255),
    (44, "Twin Cabin", "44_Twin_Cabin.png", 1727.0, 1299.0, 88.0, 56.0, 255),
    (45, "Cycle", "45_Cycle.png", 1375.0, 1141.0, 103.0, 93.0, 255),
    (46, "Map Ledgend", "46_Map_Ledgend.png", 3103.0, 277.0, 718.0, 160.0, 255),
    (48, "Tree copy 56", "48_Tree_copy_56.png", 799.0, 158.0, 2212.0, 1823.0, 255),
];

const IMAGE_URL_TABLE: &[(&str, &str)] = &[
    ("BG", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012363/interactive_map/BG.png"),
    ("Prayer_room", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012364/interactive_map/Prayer_room.png"),
    ("Big_Kitchen", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012365/interactive_map/Big_Kitchen.png"),
    ("Garden_restaurant", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012366/interactive_map/Garden_restaurant.png"),
    ("Spice_Restaurant", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012367/interactive_map/Spice_Restaurant.png"),
    ("New_Kitchen", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012368/interactive_map/New_Kitchen.png"),
    ("Split_", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012369/interactive_map/Split_.png"),
    ("Store", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012371/interactive_map/Store.png"),
    ("Generator", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012371/interactive_map/Generator.png"),
    ("owners_cabin", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012373/interactive_map/owners_cabin.png"),
    ("Billiard_Room", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012374/interactive_map/Billiard_Room.png"),
    ("Surface", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012407/interactive_map/Surface.png"),
    ("Small_Swimming", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012409/interactive_map/Small_Swimming.png"),
    ("Boats", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012410/interactive_map/Boats.png"),
    ("Entrance", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012411/interactive_map/Gate.png"),
    ("Duplex_Villa", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012413/interactive_map/Duplex_Villa.png"),
    ("Eco_Cabin", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012414/interactive_map/Eco_Cabin.png"),
    ("Mud_House", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012415/interactive_map/Mud_House.png"),
    ("Mid_House_2", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012416/interactive_map/Mid_House_2.png"),
    ("Cricket_Field", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012418/interactive_map/Cricket_Field.png"),
    ("Kids_playground", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012419/interactive_map/Kids_playground.png"),
    ("Amphi_theatre", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012421/interactive_map/Amphi_theatre.png"),
    ("Male_Staff_Quarters", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012422/interactive_map/Male_Staff_Quarters.png"),
    ("Water_villas", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012423/interactive_map/Water_villas.png"),
    ("Tower_Building", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012424/interactive_map/Tower_Building.png"),
    ("Green_Cabins", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012426/interactive_map/Green_Cabins.png"),
    ("Agri__fields", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012429/interactive_map/Agri__fields.png"),
    ("Agri__field_2", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012430/interactive_map/Agri__field_2.png"),
    ("Laundry", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012431/interactive_map/Laundry.png"),
    ("Cow_Farm", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012432/interactive_map/Cow_Farm.png"),
    ("Female_Staff_Quarters", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012433/interactive_map/Female_Staff_Quarters.png"),
    ("Agri__field_3", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012433/interactive_map/Agri__field_3.png"),
    ("Hatchery", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012435/interactive_map/Hatchery.png"),
    ("Walkway", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012436/interactive_map/Walkway.png"),
    ("Football_Field", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012438/interactive_map/Football_Field.png"),
    ("Parrking", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012439/interactive_map/Parrking.png"),
    ("Dream_House", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012440/interactive_map/Layer_8.png"),
    ("Reception", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012441/interactive_map/Reception.png"),
    ("Twin_Cabin", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012442/interactive_map/Twin_Cabin.png"),
    ("Cycle", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012443/interactive_map/Cycle.png"),
    ("Map_Ledgend", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012444/interactive_map/Map_Ledgend.png"),
    ("Logo", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012446/interactive_map/Logo.png"),
    ("Tree_copy_56", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012452/interactive_map/Tree_copy_56.png"),
    ("Roads_buggy", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012453/interactive_map/Roads_buggy.png"),
    ("Terrace", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012455/interactive_map/Terrace.png"),
    ("Big_Pools_Area", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012457/interactive_map/Big_Pools_Area.png"),
    ("Gym", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012458/interactive_map/Gym.png"),
    ("Dream_villa", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012459/interactive_map/Dream_villa.png"),
    ("Grand_hall", "https://res.cloudinary.com/dukaroz3u/image/upload/v1753012460/interactive_map/Grand_hall.png"),
];

const CLOUD_ART_A: &str = "https://res.cloudinary.com/dy80ftu9k/image/upload/v1753017621/Cloud_PNG_Clip_Art_Image-1171819204_touawb.png";
const CLOUD_ART_B: &str = "https://res.cloudinary.com/dy80ftu9k/image/upload/v1753017610/Cloud-PNG-Cutout-Architecture-Photoshop_01_iucmoe.png";

/// (id, src, x, y, width, height, opacity, duration in seconds)
type RawCloud = (u32, &'static str, f64, f64, f64, f64, f32, f64);

const CLOUD_TABLE: &[RawCloud] = &[
    (1, CLOUD_ART_A, 500.0, 200.0, 800.0, 400.0, 0.8, 120.0),
    (2, CLOUD_ART_B, 1800.0, 800.0, 1000.0, 500.0, 0.9, 90.0),
    (3, CLOUD_ART_A, 3000.0, 500.0, 900.0, 450.0, 0.85, 150.0),
    (4, CLOUD_ART_B, 4200.0, 1200.0, 700.0, 350.0, 0.75, 100.0),
    (5, CLOUD_ART_A, 6000.0, 300.0, 1200.0, 600.0, 0.9, 180.0),
    (6, CLOUD_ART_B, 800.0, 1300.0, 800.0, 400.0, 0.8, 130.0),
    (7, CLOUD_ART_A, 2500.0, 1500.0, 700.0, 350.0, 0.75, 160.0),
    (8, CLOUD_ART_B, 5500.0, 900.0, 900.0, 450.0, 0.85, 110.0),
    (9, CLOUD_ART_A, 1500.0, 100.0, 800.0, 400.0, 0.8, 140.0),
    (10, CLOUD_ART_B, 3500.0, 1000.0, 1000.0, 500.0, 0.9, 105.0),
    (11, CLOUD_ART_A, 4800.0, 1600.0, 700.0, 350.0, 0.75, 170.0),
    (12, CLOUD_ART_B, 100.0, 100.0, 600.0, 300.0, 0.8, 200.0),
    (13, CLOUD_ART_A, 1200.0, 1400.0, 900.0, 450.0, 0.85, 220.0),
    (14, CLOUD_ART_B, 2800.0, 100.0, 700.0, 350.0, 0.75, 190.0),
    (15, CLOUD_ART_A, 3800.0, 1800.0, 800.0, 400.0, 0.9, 250.0),
    (16, CLOUD_ART_B, 5000.0, 700.0, 1100.0, 550.0, 0.8, 210.0),
];

/// The layer geometry table in paint order.
pub fn layer_records() -> Vec<LayerRecord> {
    LAYER_TABLE
        .iter()
        .map(
            |&(index, name, filename, x, y, width, height, opacity)| LayerRecord {
                index,
                name: name.to_string(),
                filename: filename.to_string(),
                x,
                y,
                width,
                height,
                opacity,
            },
        )
        .collect()
}

/// Normalized layer name (plus the reserved logo key) to remote image address.
pub fn image_urls() -> Vec<(String, String)> {
    IMAGE_URL_TABLE
        .iter()
        .map(|&(key, url)| (key.to_string(), url.to_string()))
        .collect()
}

/// Drifting cloud overlay shipped with the artwork.
pub fn cloud_records() -> Vec<CloudRecord> {
    CLOUD_TABLE
        .iter()
        .map(
            |&(id, src, x, y, width, height, opacity, duration)| CloudRecord {
                id,
                src: src.to_string(),
                x,
                y,
                width,
                height,
                opacity,
                duration,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{LEGEND_LAYER_NAME, LOGO_KEY};

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(layer_records().len(), 48);
        assert!(image_urls().iter().any(|(key, _)| key == LOGO_KEY));
    }

    #[test]
    fn test_stack_indices_stay_below_hover_index() {
        let max = layer_records().iter().map(|r| r.index).max().unwrap_or(0);
        assert!(max < crate::core::constants::HOVER_Z_INDEX);
    }

    #[test]
    fn test_cloud_overlay_shares_two_artworks() {
        let clouds = cloud_records();
        assert_eq!(clouds.len(), 16);
        let mut srcs: Vec<&str> = clouds.iter().map(|c| c.src.as_str()).collect();
        srcs.sort_unstable();
        srcs.dedup();
        assert_eq!(srcs.len(), 2);
        assert!(clouds.iter().all(|c| c.duration > 0.0 && c.opacity <= 1.0));
    }

    #[test]
    fn test_legend_is_non_interactive() {
        assert!(NON_INTERACTIVE_LAYER_NAMES.contains(&LEGEND_LAYER_NAME));
    }
}
