use super::base_path;

pub fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        println!("Loaded local .env")
    }
    // Also load $DATA_DIR/.env if exists
    let data_dir_dotenv = base_path::data_dir().join(".env");
    if dotenv::from_path(&data_dir_dotenv).is_ok() {
        println!("Loaded {}", data_dir_dotenv.display());
    }
}
