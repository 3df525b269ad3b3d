//! Integration tests for concurrent sheet loading from disk

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use grip_stats::app::services::dataset_loader::load_league_data;
use grip_stats::{Config, Error, StatsEngine};

fn write_sheet(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn fixture_config(dir: &TempDir) -> Config {
    let summaries = write_sheet(
        dir,
        "pilotos.csv",
        "Piloto,Corridas,Pódios,P1,Poles\nAyrton,50,20,10,5\n",
    );
    let participations = write_sheet(
        dir,
        "corridas.csv",
        "Piloto,Pista,Liga,Temporada,Categoria,Ano,Final\n\
         Ayrton,Interlagos,GRL,Temporada 7,F1,2023,1\n",
    );
    Config::new(summaries, participations)
}

#[tokio::test]
async fn loads_both_sheets_concurrently() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir);

    let data = load_league_data(&config).await.unwrap();
    assert_eq!(data.summaries.len(), 1);
    assert_eq!(data.participations.len(), 1);

    let engine = StatsEngine::new(data);
    let report = engine.driver_report("Ayrton").unwrap();
    assert_eq!(report.rates.podium_rate, Some(40.0));
}

#[tokio::test]
async fn missing_sheet_is_data_unavailable() {
    let dir = TempDir::new().unwrap();
    let mut config = fixture_config(&dir);
    config.participations_path = dir.path().join("nonexistent.csv");

    let result = load_league_data(&config).await;
    assert!(matches!(result, Err(Error::DataUnavailable { .. })));
}

#[tokio::test]
async fn header_only_sheets_load_as_empty_datasets() {
    let dir = TempDir::new().unwrap();
    let summaries = write_sheet(&dir, "pilotos.csv", "Piloto,Corridas\n");
    let participations = write_sheet(&dir, "corridas.csv", "Piloto,Pista,Final\n");
    let config = Config::new(summaries, participations);

    let data = load_league_data(&config).await.unwrap();
    assert!(data.summaries.is_empty());
    assert!(data.participations.is_empty());
}

#[tokio::test]
async fn invalid_config_is_rejected_before_loading() {
    let dir = TempDir::new().unwrap();
    let mut config = fixture_config(&dir);
    config.load_timeout_secs = 0;

    let result = load_league_data(&config).await;
    assert!(matches!(result, Err(Error::Configuration { .. })));
}
