use crate::models::city::City;
use std::path::PathBuf;

/// Where the per-city trip files live.
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub data_dir: PathBuf,
}

impl DataConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolves the CSV path for `city` inside the data directory.
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_for_joins_city_file_onto_data_dir() {
        let config = DataConfig::new("/srv/bikeshare");

        assert_eq!(
            config.path_for(City::NewYorkCity),
            PathBuf::from("/srv/bikeshare/new_york_city.csv")
        );
        assert_eq!(
            config.path_for(City::Washington),
            PathBuf::from("/srv/bikeshare/washington.csv")
        );
    }
}
