use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Scratch working directory for one CLI run.
struct CrmSynthTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl CrmSynthTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();
        Ok(Self { _tmp: tmp, root })
    }

    fn crmsynth(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("crmsynth"));
        cmd.current_dir(&self.root)
            .env_remove("CRMSYNTH_SEED")
            .env_remove("CRMSYNTH_CUSTOMERS");
        cmd
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

const SMALL_RUN: [&str; 6] = ["--customers", "10", "--seed", "42", "--as-of", "2026-06-30"];

fn dashboard_json(cmd: &mut Command) -> Result<serde_json::Value> {
    let output = cmd.output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    Ok(serde_json::from_slice(&output.stdout)?)
}

fn line_count(path: &Path) -> Result<usize> {
    Ok(fs::read_to_string(path)?.lines().count())
}

#[test]
fn test_generate_csv_writes_three_tables() -> Result<()> {
    let env = CrmSynthTestEnv::new()?;

    env.crmsynth()
        .arg("generate")
        .args(SMALL_RUN)
        .args(["--out-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dataset exported successfully"));

    assert_eq!(line_count(&env.path("out/customers.csv"))?, 11);
    let deals = line_count(&env.path("out/deals.csv"))? - 1;
    let feedback = line_count(&env.path("out/feedback.csv"))? - 1;
    assert!((10..=30).contains(&deals), "deals = {}", deals);
    assert!((10..=50).contains(&feedback), "feedback = {}", feedback);

    let header = fs::read_to_string(env.path("out/customers.csv"))?;
    assert!(header.starts_with(
        "customer_id,region,segment,industry,signup_date,churn_risk_score,company_size,status"
    ));
    Ok(())
}

#[test]
fn test_generate_json_document() -> Result<()> {
    let env = CrmSynthTestEnv::new()?;

    env.crmsynth()
        .arg("generate")
        .args(SMALL_RUN)
        .args(["--format", "json", "--out-dir", "json_out"])
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(env.path("json_out/crm_dataset.json"))?)?;
    assert_eq!(doc["customers"].as_array().map(Vec::len), Some(10));
    assert_eq!(doc["customers"][0]["customer_id"], "CUST_00001");
    assert_eq!(doc["config"]["seed"], 42);
    Ok(())
}

#[test]
fn test_generate_limited_to_selected_regions_and_segments() -> Result<()> {
    let env = CrmSynthTestEnv::new()?;

    env.crmsynth()
        .arg("generate")
        .args(SMALL_RUN)
        .args(["--regions", "Europe", "--segments", "SMB,Enterprise", "--out-dir", "out"])
        .assert()
        .success();

    let mut reader = csv::Reader::from_path(env.path("out/customers.csv"))?;
    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        assert_eq!(&record[1], "Europe");
        assert_ne!(&record[2], "Mid-Market");
        rows += 1;
    }
    assert_eq!(rows, 10);
    Ok(())
}

#[test]
fn test_dashboard_json_is_deterministic() -> Result<()> {
    let env = CrmSynthTestEnv::new()?;

    let first = dashboard_json(env.crmsynth().arg("dashboard").args(SMALL_RUN).arg("--json"))?;
    let second = dashboard_json(env.crmsynth().arg("dashboard").args(SMALL_RUN).arg("--json"))?;
    assert_eq!(first, second);

    let kpis = &first["metrics"]["kpis"];
    for key in ["churn_percent", "avg_sentiment", "resolution_rate", "win_rate"] {
        assert!(kpis[key].is_number(), "missing {}", key);
    }
    assert_eq!(first["dataset"]["customer_count"], 10);
    Ok(())
}

#[test]
fn test_dashboard_table_output() -> Result<()> {
    let env = CrmSynthTestEnv::new()?;

    env.crmsynth()
        .arg("dashboard")
        .args(SMALL_RUN)
        .assert()
        .success()
        .stdout(predicate::str::contains("CRM Dashboard"))
        .stdout(predicate::str::contains("Win rate"))
        .stdout(predicate::str::contains("Churn tier"));
    Ok(())
}

#[test]
fn test_recommend_json_is_tagged() -> Result<()> {
    let env = CrmSynthTestEnv::new()?;

    let output = env
        .crmsynth()
        .arg("recommend")
        .args(["--customers", "200", "--seed", "7", "--as-of", "2026-06-30", "--json"])
        .output()?;
    assert!(output.status.success());

    let recs: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let recs = recs.as_array().cloned().unwrap_or_default();
    assert!(!recs.is_empty());

    let rank = |p: &str| match p {
        "High" => 0,
        "Medium" => 1,
        _ => 2,
    };
    let ranks: Vec<i32> = recs
        .iter()
        .map(|r| rank(r["priority"].as_str().unwrap_or_default()))
        .collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    assert!(recs.iter().all(|r| r["category"].is_string()));
    Ok(())
}

#[test]
fn test_report_written() -> Result<()> {
    let env = CrmSynthTestEnv::new()?;

    env.crmsynth()
        .arg("report")
        .args(SMALL_RUN)
        .args(["--out", "insights.md"])
        .assert()
        .success();

    let report = fs::read_to_string(env.path("insights.md"))?;
    assert!(report.starts_with("# CRM Insights Report"));
    assert!(report.contains("## Recommendations"));
    Ok(())
}

#[test]
fn test_inverted_range_fails_without_output() -> Result<()> {
    let env = CrmSynthTestEnv::new()?;

    env.crmsynth()
        .arg("generate")
        .args(SMALL_RUN)
        .args(["--deals-min", "3", "--deals-max", "1", "--out-dir", "never"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid generation config"));

    assert!(!env.path("never").exists());
    Ok(())
}

#[test]
fn test_config_file_env_and_flags_layering() -> Result<()> {
    let env = CrmSynthTestEnv::new()?;
    fs::write(
        env.path("crmsynth.yaml"),
        "customer_count: 4\nseed: 5\nas_of: 2026-06-30\n",
    )?;

    let from_file = dashboard_json(env.crmsynth().args(["dashboard", "--json"]))?;
    assert_eq!(from_file["dataset"]["customer_count"], 4);
    assert_eq!(from_file["dataset"]["seed"], 5);

    let from_env = dashboard_json(
        env.crmsynth()
            .args(["dashboard", "--json"])
            .env("CRMSYNTH_CUSTOMERS", "3"),
    )?;
    assert_eq!(from_env["dataset"]["customer_count"], 3);

    let from_flag = dashboard_json(
        env.crmsynth()
            .args(["dashboard", "--json", "--customers", "6"])
            .env("CRMSYNTH_CUSTOMERS", "3"),
    )?;
    assert_eq!(from_flag["dataset"]["customer_count"], 6);
    Ok(())
}

#[test]
fn test_missing_config_file_is_reported() -> Result<()> {
    let env = CrmSynthTestEnv::new()?;

    env.crmsynth()
        .args(["dashboard", "--config", "missing.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load generation config"));
    Ok(())
}
