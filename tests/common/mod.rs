use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stand-in for `soffice`: honors `--outdir`, writes `<stem>.txt` with the
/// input's own content, and fails for any input whose name contains "boom".
const STUB_CONVERTER: &str = r#"#!/bin/sh
outdir=""
input=""
while [ "$#" -gt 0 ]; do
    case "$1" in
        --outdir)
            outdir="$2"
            shift 2
            ;;
        --convert-to)
            shift 2
            ;;
        --headless)
            shift
            ;;
        *)
            input="$1"
            shift
            ;;
    esac
done
[ -n "$outdir" ] || exit 2
[ -f "$input" ] || exit 2
case "$input" in
    *boom*)
        echo "simulated conversion failure" >&2
        exit 1
        ;;
esac
base=$(basename "$input")
cat "$input" > "$outdir/${base%.*}.txt"
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub docs: PathBuf,
    pub converter: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let docs = tmp.path().join("docs");
        fs::create_dir_all(&docs).expect("create docs dir");
        let converter = write_stub_converter(tmp.path());
        Self {
            _tmp: tmp,
            docs,
            converter,
        }
    }

    pub fn write_doc(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.docs.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dirs");
        }
        fs::write(&path, content).expect("write fixture document");
        path
    }

    pub fn doc_path(&self, rel: &str) -> PathBuf {
        self.docs.join(rel)
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.docs.join(rel)).expect("read output file")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("doc2txt").expect("binary under test");
        cmd.arg("--converter").arg(&self.converter);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

fn write_stub_converter(base: &Path) -> PathBuf {
    let bin = base.join("bin");
    fs::create_dir_all(&bin).expect("create stub bin dir");
    let path = bin.join("soffice");
    fs::write(&path, STUB_CONVERTER).expect("write stub converter");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("mark stub executable");
    }
    path
}
