//! Conversion of the layout fixtures under tests/fixtures.

use crate::common::{attrs, convert, find, fixture_path, load_fixture};
use axml_babel::{export, ConvertError, ConvertOptions, ExportOutcome};
use insta::assert_snapshot;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_login_trace() {
    let conversion = convert(&load_fixture("login.axml")).expect("root should map");

    assert_snapshot!(conversion.paths().join("\n"), @r"
    StackLayout
    StackLayout / Image
    StackLayout / Label
    StackLayout / Entry
    StackLayout / ContentPresenter
    StackLayout / ContentPresenter / Checkbox
    StackLayout / StackLayout
    StackLayout / StackLayout / Button
    StackLayout / StackLayout / Button
    StackLayout / ListView
    ");
}

#[test]
fn test_login_attributes() {
    let conversion = convert(&load_fixture("login.axml")).unwrap();
    let tree = &conversion.tree;
    let root = conversion.root;

    assert_eq!(
        attrs(tree, root),
        vec![
            ("Orientation", "Vertical"),
            ("HorizontalOptions", "FillAndExpand"),
            ("VerticalOptions", "FillAndExpand"),
            ("Padding", "16"),
        ]
    );

    assert_eq!(
        attrs(tree, find(tree, root, "Image", 0)),
        vec![
            ("Source", "logo.png"),
            ("WidthRequest", "96"),
            ("HeightRequest", "96"),
            ("Margin", "0,0,0,24"),
        ]
    );

    assert_eq!(
        attrs(tree, find(tree, root, "Label", 0)),
        vec![
            ("Text", "{Binding Greeting, Converter=Upper}"),
            ("HorizontalOptions", "Fill"),
            ("VerticalOptions", "Fill"),
        ]
    );

    assert_eq!(
        attrs(tree, find(tree, root, "Entry", 0)),
        vec![
            ("HorizontalOptions", "FillAndExpand"),
            ("VerticalOptions", "Fill"),
            ("Text", "{Binding UserName}"),
            ("IsEnabled", "{Binding IsIdle}"),
        ]
    );

    assert_eq!(
        attrs(tree, find(tree, root, "Checkbox", 0)),
        vec![
            ("Text", "Remember me"),
            ("Checked", "{Binding RememberMe}"),
        ]
    );

    assert_eq!(
        attrs(tree, find(tree, root, "StackLayout", 1)),
        vec![
            ("Orientation", "Horizontal"),
            ("HorizontalOptions", "FillAndExpand"),
            ("VerticalOptions", "Fill"),
            ("Padding", "0,8,4,0"),
        ]
    );

    assert_eq!(
        attrs(tree, find(tree, root, "Button", 0)),
        vec![
            ("Text", "Cancel"),
            ("HorizontalOptions", "FillAndExpand"),
            ("Margin", "0,0,8,0"),
            ("Command", "{Binding CancelCommand}"),
        ]
    );

    assert_eq!(
        attrs(tree, find(tree, root, "Button", 1)),
        vec![
            ("Text", "Sign in"),
            ("HorizontalOptions", "FillAndExpand"),
            ("Command", "{Binding SignInCommand}"),
            (
                "IsVisible",
                "{Binding CanSignIn, Converter=Visibility, ConverterParameter=Collapse}"
            ),
        ]
    );

    assert_eq!(
        attrs(tree, find(tree, root, "ListView", 0)),
        vec![
            ("HorizontalOptions", "FillAndExpand"),
            ("VerticalOptions", "FillAndExpand"),
            ("ItemsSource", "{Binding RecentUsers}"),
            ("SelectedItem", "{Binding SelectedUser}"),
        ]
    );
}

#[test]
fn test_export_login_fixture() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("LoginPage.xaml");

    let mut traced = Vec::new();
    let outcome = export(
        &fixture_path("login.axml"),
        &output,
        &ConvertOptions::new("Demo.Views"),
        &mut |path| traced.push(path.to_string()),
    )
    .unwrap();

    assert_eq!(outcome, ExportOutcome::Written(output.clone()));
    assert_eq!(traced.len(), 10);

    let xml = fs::read_to_string(&output).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let page = doc.root_element();
    assert_eq!(page.tag_name().name(), "ContentPage");
    assert_eq!(
        page.attribute(("http://schemas.microsoft.com/winfx/2009/xaml", "Class")),
        Some("Demo.Views.LoginPage")
    );
    let elements = doc.descendants().filter(|n| n.is_element()).count();
    assert_eq!(elements, 11);
}

#[test]
fn test_export_overwrite_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("LoginPage.xaml");
    fs::write(&output, "stale").unwrap();

    let refused = export(
        &fixture_path("login.axml"),
        &output,
        &ConvertOptions::new("Demo"),
        &mut |_| {},
    );
    assert!(matches!(refused, Err(ConvertError::PreconditionFailed(_))));
    assert_eq!(fs::read_to_string(&output).unwrap(), "stale");

    let outcome = export(
        &fixture_path("login.axml"),
        &output,
        &ConvertOptions::new("Demo").with_overwrite(true),
        &mut |_| {},
    )
    .unwrap();
    assert_eq!(outcome, ExportOutcome::Written(output.clone()));
    assert!(fs::read_to_string(&output).unwrap().contains("<ContentPage"));
}

#[test]
fn test_export_unmapped_root_writes_nothing() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("MergePage.xaml");

    let mut traced = Vec::new();
    let outcome = export(
        &fixture_path("merge.axml"),
        &output,
        &ConvertOptions::new("Demo"),
        &mut |path| traced.push(path.to_string()),
    )
    .unwrap();

    assert_eq!(outcome, ExportOutcome::NoOutput);
    assert!(traced.is_empty());
    assert!(!output.exists());
}

#[test]
fn test_export_malformed_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.axml");
    fs::write(&input, "<LinearLayout><TextView></LinearLayout>").unwrap();

    let result = export(
        &input,
        &dir.path().join("Broken.xaml"),
        &ConvertOptions::new("Demo"),
        &mut |_| {},
    );
    assert!(matches!(result, Err(ConvertError::MalformedInput(_))));
}
