//! End-to-end conversion scenarios on small inline layouts.

use crate::common::{attrs, convert, find};
use axml_babel::{convert_str, ConvertOptions};

#[test]
fn test_linear_layout_with_label() {
    let conversion = convert(
        r#"<LinearLayout orientation="horizontal" padding="8dp">
             <TextView text="Hi" layout_width="wrap_content"/>
           </LinearLayout>"#,
    )
    .expect("root should map");

    let tree = &conversion.tree;
    assert_eq!(tree.node(conversion.root).name(), "StackLayout");
    assert_eq!(
        attrs(tree, conversion.root),
        vec![("Orientation", "Horizontal"), ("Padding", "8")]
    );

    let label = tree.node(conversion.root).children()[0];
    assert_eq!(tree.node(label).name(), "Label");
    assert_eq!(
        attrs(tree, label),
        vec![("Text", "Hi"), ("HorizontalOptions", "Fill")]
    );
}

#[test]
fn test_zero_width_with_and_without_weight() {
    let conversion = convert(
        r#"<LinearLayout>
             <Button layout_width="0dp" layout_weight="1"/>
             <Button layout_width="0dp"/>
           </LinearLayout>"#,
    )
    .unwrap();
    let tree = &conversion.tree;

    let weighted = find(tree, conversion.root, "Button", 0);
    assert_eq!(
        tree.node(weighted).attribute("HorizontalOptions"),
        Some("FillAndExpand")
    );
    assert_eq!(tree.node(weighted).attribute("WidthRequest"), None);

    let fixed = find(tree, conversion.root, "Button", 1);
    assert_eq!(tree.node(fixed).attribute("WidthRequest"), Some("0"));
    assert_eq!(tree.node(fixed).attribute("HorizontalOptions"), None);
}

#[test]
fn test_binding_wins_over_static_text() {
    let conversion = convert(r#"<TextView text="Hi" MvxBind="Text Title"/>"#).unwrap();
    let attributes = attrs(&conversion.tree, conversion.root);

    assert_eq!(attributes, vec![("Text", "{Binding Title}")]);
}

#[test]
fn test_binding_without_static_text_adds_attribute() {
    let conversion = convert(r#"<EditText MvxBind="Text Name; Enabled CanEdit"/>"#).unwrap();
    assert_eq!(
        attrs(&conversion.tree, conversion.root),
        vec![
            ("Text", "{Binding Name}"),
            ("IsEnabled", "{Binding CanEdit}"),
        ]
    );
}

#[test]
fn test_nested_unmapped_wrappers_are_flattened() {
    let conversion = convert(
        r#"<ScrollView>
             <android.support.constraint.ConstraintLayout>
               <View>
                 <TextView text="Deep"/>
               </View>
               <ImageView src="@drawable/banner"/>
             </android.support.constraint.ConstraintLayout>
           </ScrollView>"#,
    )
    .unwrap();

    assert_eq!(
        conversion.paths(),
        vec!["ScrollView", "ScrollView / Label", "ScrollView / Image"]
    );
}

#[test]
fn test_unmapped_root_produces_nothing() {
    assert!(convert(r#"<merge><TextView text="Lost"/></merge>"#).is_none());
}

#[test]
fn test_orientation_ignored_outside_linear_layout() {
    let conversion = convert(r#"<MvxLinearLayout orientation="vertical"/>"#).unwrap();
    assert_eq!(conversion.tree.node(conversion.root).name(), "StackLayout");
    assert!(attrs(&conversion.tree, conversion.root).is_empty());
}

#[test]
fn test_malformed_values_are_dropped_silently() {
    let conversion = convert(
        r#"<ImageView layout_width="@dimen/icon" layout_height="1.5dp"
                      MvxBind="Source; Hint Placeholder; Visibility"/>"#,
    )
    .unwrap();
    assert!(attrs(&conversion.tree, conversion.root).is_empty());
}

#[test]
fn test_convert_str_produces_page() {
    let xml = convert_str(
        r#"<LinearLayout orientation="vertical"><Button text="Go"/></LinearLayout>"#,
        "StartPage",
        &ConvertOptions::new("Demo.Views").with_data_context(true),
    )
    .unwrap()
    .expect("root should map");

    let doc = roxmltree::Document::parse(&xml).unwrap();
    let page = doc.root_element();
    assert_eq!(page.tag_name().name(), "ContentPage");
    assert_eq!(
        page.tag_name().namespace(),
        Some("http://xamarin.com/schemas/2014/forms")
    );
    assert_eq!(
        page.attribute(("http://schemas.microsoft.com/winfx/2009/xaml", "Class")),
        Some("Demo.Views.StartPage")
    );
    assert_eq!(
        page.attribute(("http://schemas.microsoft.com/expression/blend/2008", "DataContext")),
        Some("{d:DesignInstance vm:vmName}")
    );

    let layout = page.first_element_child().unwrap();
    assert_eq!(layout.tag_name().name(), "StackLayout");
    assert_eq!(layout.attribute("Orientation"), Some("Vertical"));
    let button = layout.first_element_child().unwrap();
    assert_eq!(button.tag_name().name(), "Button");
    assert_eq!(button.attribute("Text"), Some("Go"));
}

#[test]
fn test_design_time_values_do_not_replace_real_ones() {
    let conversion = convert(
        r#"<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android"
               xmlns:tools="http://schemas.android.com/tools">
             <TextView android:text="Real" tools:text="Preview only"
                       android:layout_width="wrap_content" tools:layout_width="48dp"/>
           </LinearLayout>"#,
    )
    .unwrap();
    let label = find(&conversion.tree, conversion.root, "Label", 0);

    assert_eq!(
        attrs(&conversion.tree, label),
        vec![("Text", "Real"), ("HorizontalOptions", "Fill")]
    );
}
