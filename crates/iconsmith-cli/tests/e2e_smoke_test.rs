use std::{fs, path::Path};

use tempfile::tempdir;

use iconsmith::IconsmithError;
use iconsmith_cli::{Args, run};

const SPRITE: &str = r##"<svg>
  <symbol id="icon-arrow-left" viewBox="0 0 24 24">
    <g fill="none">
      <path d="M15 6l-6 6 6 6" fill="#ABCDEF" stroke-width="2"/>
    </g>
  </symbol>
  <symbol id="icon-user" viewBox="0 0 1024 1024">
    <circle cx="512" cy="320" r="192" fill="#333333"/>
  </symbol>
</svg>"##;

const SCRIPT: &str = r##"!function(c){var l,h,a,t,i,v='<svg><symbol id="icon-close" viewBox="0 0 1024 1024"><path d="M0 0L1024 1024" fill="#333333" ></path></symbol></svg>';}(window);"##;

/// Writes a config file pointing the local svg directory into `dir`
fn write_config(dir: &Path, target: &str, prefix: &str) -> String {
    let config_path = dir.join("config.toml");
    let local_svgs = dir.join("localSvgs");
    fs::write(
        &config_path,
        format!(
            "[source]\nlocal_svgs = {local_svgs:?}\n\n[output]\ntarget = \"{target}\"\n\n[naming]\ntrim_icon_prefix = \"{prefix}\"\n",
        ),
    )
    .expect("Failed to write config");
    config_path.to_string_lossy().to_string()
}

fn args(input: &Path, output: &Path, config: String) -> Args {
    Args {
        input: Some(input.to_string_lossy().to_string()),
        output: Some(output.to_string_lossy().to_string()),
        config: Some(config),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_javascript_target() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("iconfont.svg");
    fs::write(&input, SPRITE).unwrap();
    let out = temp_dir.path().join("iconfont");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("Stale.js"), "stale").unwrap();

    run(&args(&input, &out, write_config(temp_dir.path(), "javascript", "icon-"))).expect("Generation failed");

    for file in [
        "IconArrowLeft.js",
        "IconArrowLeft.d.ts",
        "IconUser.js",
        "IconUser.d.ts",
        "index.js",
        "index.d.ts",
        "helper.js",
        "helper.d.ts",
    ] {
        assert!(out.join(file).is_file(), "missing {file}");
    }
    assert!(!out.join("Stale.js").exists());

    let index = fs::read_to_string(out.join("index.js")).unwrap();
    assert!(index.contains("case 'arrow-left':"));
    assert!(index.contains("case 'user':"));
}

#[test]
fn e2e_smoke_test_sprite_warnings_still_generate() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("iconfont.svg");
    fs::write(
        &input,
        r#"<svg><defs><style>.a{}</style></defs><symbol id="icon-dot" viewBox="0 0 2 2"><circle r="1"/></symbol></svg>"#,
    )
    .unwrap();
    let out = temp_dir.path().join("iconfont");

    run(&args(&input, &out, write_config(temp_dir.path(), "typescript", "icon-"))).expect("Generation failed");

    assert!(out.join("IconDot.tsx").is_file());
    let index = fs::read_to_string(out.join("index.tsx")).unwrap();
    assert!(index.contains("export type IconNames = 'dot';"));
}

#[test]
fn e2e_smoke_test_typescript_with_local_svgs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("iconfont.js");
    fs::write(&input, SCRIPT).unwrap();
    let local_svgs = temp_dir.path().join("localSvgs");
    fs::create_dir_all(&local_svgs).unwrap();
    fs::write(
        local_svgs.join("logo.svg"),
        "<svg viewBox=\"0 0 10 10\"><rect width=\"10\" height=\"10\"/></svg>",
    )
    .unwrap();
    let out = temp_dir.path().join("iconfont");

    run(&args(&input, &out, write_config(temp_dir.path(), "typescript", ""))).expect("Generation failed");

    assert!(out.join("IconClose.tsx").is_file());
    // Without a prefix the local component is named after the file alone
    assert!(out.join("Logo.tsx").is_file());
    assert!(out.join("helper.ts").is_file());

    let index = fs::read_to_string(out.join("index.tsx")).unwrap();
    assert!(index.contains("export type IconNames = 'icon-close' | 'logo';"));
    assert!(index.contains("return <Logo key=\"L1\" {...rest} />;"));
}

#[test]
fn e2e_smoke_test_unsupported_element_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("iconfont.svg");
    fs::write(
        &input,
        r#"<svg><symbol id="icon-a" viewBox="0 0 1 1"><text>A</text></symbol></svg>"#,
    )
    .unwrap();
    let out = temp_dir.path().join("iconfont");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("Previous.js"), "kept").unwrap();

    let err = run(&args(&input, &out, write_config(temp_dir.path(), "javascript", "icon-"))).unwrap_err();

    assert!(matches!(err, IconsmithError::Parse { .. }));
    // The previous output is untouched
    assert!(out.join("Previous.js").is_file());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 1);
}

#[test]
fn e2e_smoke_test_missing_symbol_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = Args {
        input: None,
        output: Some(temp_dir.path().join("out").to_string_lossy().to_string()),
        config: Some(write_config(temp_dir.path(), "javascript", "icon-")),
        log_level: "off".to_string(),
    };

    let err = run(&args).unwrap_err();

    assert!(matches!(err, IconsmithError::Config(msg) if msg.contains("symbol file")));
    assert!(!temp_dir.path().join("out").exists());
}
