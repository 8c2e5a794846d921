use razordoc::model::{Library, TypeRef};
use razordoc::render::{self, razor::RazorRenderer, Renderer};
use razordoc::{manifest, Error, Generator};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const WIDGET_MANIFEST: &str = r#"{
    "name": "Widgets",
    "types": [
        {
            "name": "Widget",
            "full_name": "Widgets.Widget",
            "kind": "component",
            "properties": [
                {
                    "name": "Label",
                    "type": { "name": "String", "full_name": "System.String" },
                    "declaring_type": { "name": "Widget", "full_name": "Widgets.Widget", "library": "Widgets" },
                    "parameter": true
                }
            ]
        },
        { "name": "BaseWidget", "full_name": "Widgets.BaseWidget", "kind": "component" }
    ]
}"#;

const WIDGET_XML: &str = r#"<?xml version="1.0"?>
<doc>
    <members>
        <member name="T:Widgets.Widget"><summary>A widget</summary></member>
        <member name="T:Widgets.BaseWidget"><summary>Never documented</summary></member>
        <member name="P:Widgets.Widget.Label"><summary>The label text</summary></member>
    </members>
</doc>
"#;

fn run(manifest_json: &str, xml: &str) -> (TempDir, Vec<std::path::PathBuf>) {
    let input = TempDir::new().unwrap();
    let xml_path = input.path().join("Widgets.xml");
    fs::write(&xml_path, xml).unwrap();
    let library = manifest::parse(manifest_json).unwrap();

    let out = TempDir::new().unwrap();
    let written = Generator::new(library, xml_path, out.path().to_path_buf())
        .unwrap()
        .generate()
        .unwrap();
    (out, written)
}

fn count_files(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn widget_end_to_end() {
    let (out, written) = run(WIDGET_MANIFEST, WIDGET_XML);

    assert_eq!(written, [out.path().join("DocWidget.razor")]);
    assert_eq!(count_files(out.path()), 1);

    let page = fs::read_to_string(&written[0]).unwrap();
    assert!(page.contains("<h3 class=\"mat-h3\">Widget</h3>"));
    assert!(page.contains("<h5 class=\"mat-h5\">Widget</h5>"));
    assert!(page.contains("<p>A widget</p>"));
    assert_eq!(page.matches("\t<tr>\n\t\t<td>").count(), 1);
    assert!(page.contains(
        "\t<tr>\n\t\t<td>Label</td>\n\t\t<td>String</td>\n\t\t<td>The label text</td>\n\t</tr>\n"
    ));
    assert!(!page.contains("Never documented"));
}

#[test]
fn empty_library_writes_nothing() {
    let (out, written) = run(r#"{ "name": "Widgets" }"#, "<doc><members/></doc>");
    assert!(written.is_empty());
    assert_eq!(count_files(out.path()), 0);
}

#[test]
fn type_without_qualified_name_still_rendered() {
    let manifest_json = r#"{
        "name": "Widgets",
        "types": [{ "name": "Anonymous", "kind": "component" }]
    }"#;
    let (_out, written) = run(manifest_json, WIDGET_XML);
    let page = fs::read_to_string(&written[0]).unwrap();
    assert!(page.contains(">Anonymous</h3>"));
    assert!(!page.contains("<p>"));
}

#[test]
fn file_name_is_sanitized() {
    let manifest_json = r#"{
        "name": "Widgets",
        "types": [{ "name": "Odd:Name?", "full_name": "Widgets.Odd" }]
    }"#;
    let (out, written) = run(manifest_json, WIDGET_XML);
    assert_eq!(written, [out.path().join("DocOddName.razor")]);
}

#[test]
fn nested_generic_names_at_any_depth() {
    let mut ty = TypeRef {
        name: "Int32".to_string(),
        ..Default::default()
    };
    let mut expected = "Int32".to_string();
    for depth in 0..6 {
        ty = TypeRef {
            name: "List`1".to_string(),
            generic_arguments: vec![ty],
            ..Default::default()
        };
        expected = format!("List<{}>", expected);
        assert_eq!(render::value_type_name(&ty), expected, "depth {}", depth);
    }
}

#[test]
fn missing_comment_export_is_not_found() {
    let out = TempDir::new().unwrap();
    let err = Generator::new(
        Library::default(),
        out.path().join("absent.xml"),
        out.path().to_path_buf(),
    )
    .err()
    .unwrap();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn json_renderer_through_generator() {
    let input = TempDir::new().unwrap();
    let xml_path = input.path().join("Widgets.xml");
    fs::write(&xml_path, WIDGET_XML).unwrap();
    let out = TempDir::new().unwrap();

    let written = Generator::new(
        manifest::parse(WIDGET_MANIFEST).unwrap(),
        xml_path,
        out.path().to_path_buf(),
    )
    .unwrap()
    .with_renderer(render::create_renderer("json", None).unwrap())
    .generate()
    .unwrap();

    assert_eq!(written, [out.path().join("DocWidget.json")]);
    assert_eq!(RazorRenderer::default().file_extension(), "razor");
}
