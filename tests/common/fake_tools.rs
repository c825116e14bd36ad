use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

const FAKE_PYTHON: &str = r#"#!/bin/sh
echo "python3 $*" >> "__LOG__"

if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
    if [ "$4" = "-r" ] && [ -n "$FAKE_PIP_FAIL" ]; then
        echo "ERROR: No matching distribution found for fastapi" >&2
        exit 1
    fi
    if [ "$4" = "-r" ]; then
        echo "Successfully installed fastapi uvicorn"
    fi
    exit 0
fi

if [ "$1" = "-c" ]; then
    module="${2#import }"
    for missing in $FAKE_MISSING_MODULES; do
        if [ "$missing" = "$module" ]; then
            echo "ModuleNotFoundError: No module named '$module'" >&2
            exit 1
        fi
    done
    exit 0
fi

if [ "$1" = "-m" ] && [ "$2" = "uvicorn" ]; then
    echo "LAUNCHED $*"
    echo "CWD=$(pwd)"
    echo "PYTHONPATH=$PYTHONPATH"
    echo "OCR_TEMP_FOLDER=$OCR_TEMP_FOLDER"
    echo "UPLOAD_FOLDER=$UPLOAD_FOLDER"
    echo "SSL_CERT_PATH=$SSL_CERT_PATH"
    echo "TESSERACT_CMD=$TESSERACT_CMD"
    exit "${FAKE_SERVER_EXIT:-0}"
fi

exit 0
"#;

const FAKE_APT: &str = r#"#!/bin/sh
echo "apt-get $*" >> "__LOG__"
if [ -n "$FAKE_APT_FAIL" ]; then
    echo "E: Could not open lock file /var/lib/dpkg/lock-frontend" >&2
    exit 100
fi
exit 0
"#;

const FAKE_TESSERACT: &str = r#"#!/bin/sh
echo "tesseract $*" >> "__LOG__"
if [ -n "$FAKE_TESSERACT_HANG" ]; then
    exec sleep 30
fi
echo "tesseract 5.3.0"
exit 0
"#;

const FAKE_PDFTOPPM: &str = r#"#!/bin/sh
echo "pdftoppm $*" >> "__LOG__"
echo "pdftoppm version 22.02.0" >&2
exit 0
"#;

/// Install logging stand-ins for the external tools into `bin_dir`.
pub fn install(bin_dir: &Path, log_file: &Path) {
    fs::create_dir_all(bin_dir).expect("Failed to create bin dir");
    let log = log_file.to_string_lossy();

    for (name, template) in [
        ("python3", FAKE_PYTHON),
        ("apt-get", FAKE_APT),
        ("tesseract", FAKE_TESSERACT),
        ("pdftoppm", FAKE_PDFTOPPM),
    ] {
        let path = bin_dir.join(name);
        fs::write(&path, template.replace("__LOG__", &log)).expect("Failed to write fake tool");
        let mut perms = fs::metadata(&path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");
    }
}
