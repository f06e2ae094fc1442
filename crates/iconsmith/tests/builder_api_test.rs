//! Integration tests for the IconSetBuilder API
//!
//! These tests drive the whole pipeline from sprite text to generated files.

use std::fs;

use iconsmith::{
    IconSetBuilder, IconsmithError,
    config::{AppConfig, NamingConfig, OutputConfig, SourceConfig, TargetFormat},
    template::TemplateError,
};

const SPRITE: &str = r##"<svg>
  <symbol id="icon-arrow-left" viewBox="0 0 24 24">
    <g fill="none">
      <path d="M15 6l-6 6 6 6" fill="#ABCDEF" stroke-width="2"/>
    </g>
  </symbol>
  <symbol id="icon-user" viewBox="0 0 1024 1024">
    <g>
      <circle cx="512" cy="320" r="192" fill="#333333"/>
      <path d="M128 960c0-212 172-384 384-384" fill="#333333"/>
    </g>
  </symbol>
</svg>"##;

fn typescript_config(prefix: Option<&str>) -> AppConfig {
    AppConfig::new(
        SourceConfig::default(),
        OutputConfig::new("./out", TargetFormat::TypeScript, 18),
        NamingConfig::new(prefix.map(str::to_string)),
    )
}

#[test]
fn test_builder_api_exists() {
    let _builder = IconSetBuilder::default();
}

#[test]
fn test_two_level_example() {
    let builder = IconSetBuilder::new(typescript_config(Some("icon-")));
    let sprite = builder.parse_sprite("sprite.svg", SPRITE).expect("Failed to parse");
    let icon_set = builder.generate(sprite.icons()).expect("Failed to generate");

    let component = icon_set.file("IconArrowLeft.tsx").expect("Missing component").contents();
    let expected = concat!(
        "    <Svg viewBox=\"0 0 24 24\" width={size} height={size} {...rest}>\n",
        "      <G\n",
        "        fill='none'\n",
        "      >\n",
        "          <Path\n",
        "        d=\"M15 6l-6 6 6 6\"\n",
        "        fill={getIconColor(color, 0, '#ABCDEF')}\n",
        "        strokeWidth=\"2\"\n",
        "          />\n",
        "      </G>\n",
        "    </Svg>\n",
    );
    assert!(component.contains(expected), "Unexpected markup:\n{component}");
    assert!(component.contains("import { Svg, GProps, Path, G } from 'react-native-svg';"));

    let index = icon_set.file("index.tsx").expect("Missing aggregator").contents();
    assert!(index.contains("    case 'arrow-left':\n      return <IconArrowLeft key=\"1\" {...rest} />;\n"));
    assert!(index.contains("export type IconNames = 'arrow-left' | 'user';"));
}

#[test]
fn test_degenerate_group_and_repeated_colors() {
    let builder = IconSetBuilder::new(typescript_config(None));
    let sprite = builder.parse_sprite("sprite.svg", SPRITE).expect("Failed to parse");
    let icon_set = builder.generate(sprite.icons()).expect("Failed to generate");

    let component = icon_set.file("IconUser.tsx").expect("Missing component").contents();

    // The attribute-less <g> emits no tag and does not deepen its children
    assert!(!component.contains("<G"));
    assert!(component.contains("      <Circle\n"));
    // Equal colors still get their own slots
    assert!(component.contains("fill={getIconColor(color, 0, '#333333')}"));
    assert!(component.contains("fill={getIconColor(color, 1, '#333333')}"));
    // The degenerate group's kind is still imported
    assert!(component.contains("import { Svg, GProps, Path, G, Circle } from 'react-native-svg';"));

    // Without a prefix the raw id is the lookup key
    let index = icon_set.file("index.tsx").expect("Missing aggregator").contents();
    assert!(index.contains("case 'icon-user':"));
}

#[test]
fn test_sprite_warnings_do_not_abort() {
    let sprite = r##"<svg><defs/><symbol id="icon-dot" viewBox="0 0 2 2"><circle r="1" fill="#000"/></symbol></svg>"##;
    let builder = IconSetBuilder::new(typescript_config(Some("icon-")));

    let parsed = builder.parse_sprite("sprite.svg", sprite).expect("Warnings must not fail parsing");

    assert_eq!(parsed.warnings().len(), 1);
    let icon_set = builder.generate(parsed.icons()).expect("Failed to generate");
    assert!(icon_set.file("IconDot.tsx").is_some());
}

#[test]
fn test_unsupported_element_aborts_batch() {
    let sprite = r#"<svg>
  <symbol id="ok" viewBox="0 0 1 1"><path d="M0"/></symbol>
  <symbol id="bad" viewBox="0 0 1 1"><text>A</text></symbol>
</svg>"#;
    let builder = IconSetBuilder::default();

    let err = builder.parse_sprite("sprite.svg", sprite).unwrap_err();

    match err {
        IconsmithError::Parse { err, name, src } => {
            assert_eq!(name, "sprite.svg");
            assert_eq!(src, sprite);
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_invalid_prefix_pattern() {
    let builder = IconSetBuilder::new(typescript_config(Some("icon(")));
    let err = builder.generate(&[]).unwrap_err();

    assert!(matches!(err, IconsmithError::Naming(_)));
}

#[test]
fn test_zero_icon_size_is_rejected() {
    let config = AppConfig::new(
        SourceConfig::default(),
        OutputConfig::new("./out", TargetFormat::JavaScript, 0),
        NamingConfig::default(),
    );
    let err = IconSetBuilder::new(config).generate(&[]).unwrap_err();

    assert!(matches!(err, IconsmithError::Config(_)));
}

#[test]
fn test_template_override_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("SingleIcon.tsx"),
        "// #componentName# (#size#)\nimport { #svgComponents# } from 'react-native-svg';\nexport default () => (#iconContent#);\n",
    )
    .unwrap();

    let config = AppConfig::new(
        SourceConfig::default(),
        OutputConfig::new("./out", TargetFormat::TypeScript, 32).with_template_dir(dir.path()),
        NamingConfig::default(),
    );
    let builder = IconSetBuilder::new(config);
    let sprite = builder.parse_sprite("sprite.svg", SPRITE).unwrap();
    let icon_set = builder.generate(sprite.icons()).unwrap();

    let component = icon_set.file("IconUser.tsx").unwrap().contents();
    assert!(component.starts_with("// IconUser (32)\n"));
    // The helper import is optional and the override has no marker for it
    assert!(!component.contains("import { getIconColor }"));
    // Templates the directory lacks come from the embedded set
    assert!(icon_set.file("index.tsx").unwrap().contents().contains("IconFont"));
}

#[test]
fn test_template_missing_required_marker() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("Icon.js"), "export default null;\n").unwrap();

    let config = AppConfig::new(
        SourceConfig::default(),
        OutputConfig::new("./out", TargetFormat::JavaScript, 18).with_template_dir(dir.path()),
        NamingConfig::default(),
    );
    let err = IconSetBuilder::new(config).generate(&[]).unwrap_err();

    assert!(matches!(
        err,
        IconsmithError::Template(TemplateError::Orphan { .. })
    ));
}

#[test]
fn test_read_local_svgs_sorted() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("zeta.svg"), "<svg viewBox=\"0 0 1 1\"></svg>").unwrap();
    fs::write(
        dir.path().join("alpha.svg"),
        "<svg><style>.a{}</style></svg>",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not an icon").unwrap();

    let builder = IconSetBuilder::new(typescript_config(Some("icon")));
    let icons = builder.read_local_svgs(dir.path()).expect("Failed to read");

    let ids: Vec<_> = icons.iter().map(|icon| icon.id()).collect();
    assert_eq!(ids, ["alpha", "zeta"]);

    let icon_set = builder.generate(&icons).unwrap();
    let alpha = icon_set.file("IconAlpha.tsx").unwrap().contents();
    assert!(alpha.contains("<SvgCss xml={xml}"));
    let index = icon_set.file("index.tsx").unwrap().contents();
    assert!(index.contains("return <IconZeta key=\"L2\" {...rest} />;"));
}

#[test]
fn test_read_local_svgs_missing_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let icons = IconSetBuilder::default()
        .read_local_svgs(&dir.path().join("missing"))
        .expect("Missing directory should yield no icons");

    assert!(icons.is_empty());
}

#[test]
fn test_read_local_svgs_malformed_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("broken.svg"), "<svg><g></svg>").unwrap();

    let err = IconSetBuilder::default().read_local_svgs(dir.path()).unwrap_err();

    match err {
        IconsmithError::Parse { name, .. } => assert_eq!(name, "broken.svg"),
        other => panic!("Expected a parse error, got {other:?}"),
    }
}
