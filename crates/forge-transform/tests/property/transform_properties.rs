use forge_core::config::TransformConfig;
use forge_core::models::{
    Animation, AnimationDefinition, AnimationKind, CodeModification, CustomizationBundle,
    ModificationAction, Trigger,
};
use forge_transform::transform;
use proptest::prelude::*;

fn element_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Button", "Card", "Badge", "IconButton", "div", "span"])
        .prop_map(str::to_string)
}

fn class_list(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9-]{0,6}", 0..max)
}

fn action() -> impl Strategy<Value = (ModificationAction, String)> {
    prop_oneof![
        class_list(4)
            .prop_filter("non-empty", |c| !c.is_empty())
            .prop_map(|c| (ModificationAction::AddClass, c.join(" "))),
        ("[a-z][a-z-]{0,6}", "[a-z0-9]{1,6}")
            .prop_map(|(n, v)| (ModificationAction::AddProp, format!("data-{n}={v}"))),
        prop::sample::select(vec!["motion.div", "Tooltip", "section"])
            .prop_map(|w| (ModificationAction::WrapElement, w.to_string())),
    ]
}

fn modification() -> impl Strategy<Value = CodeModification> {
    (element_name(), action()).prop_map(|(target, (action, value))| CodeModification {
        target: target.to_lowercase(),
        action,
        value,
    })
}

fn component(names: &[String], classes: &[Vec<String>]) -> String {
    let mut body = String::new();
    for (name, class) in names.iter().zip(classes) {
        body.push_str(&format!("\n      <{name} className=\"{}\" />", class.join(" ")));
    }
    format!(
        "\"use client\"\n\nimport * as React from \"react\"\n\nexport function Demo() {{\n  return (\n    <div>{body}\n    </div>\n  )\n}}\n"
    )
}

fn motion_animation() -> Animation {
    let mut definition = serde_json::Map::new();
    definition.insert("scale".to_string(), serde_json::json!(1.05));
    Animation {
        name: "lift".to_string(),
        kind: AnimationKind::MotionConfig,
        definition: AnimationDefinition::Motion(definition),
        trigger: Trigger::Hover,
    }
}

proptest! {
    #[test]
    fn applying_twice_equals_applying_once(
        names in prop::collection::vec(element_name(), 1..5),
        classes in prop::collection::vec(class_list(3), 5),
        modifications in prop::collection::vec(modification(), 0..5),
        with_motion in any::<bool>(),
    ) {
        let source = component(&names, &classes);
        let bundle = CustomizationBundle {
            animations: if with_motion { vec![motion_animation()] } else { Vec::new() },
            code_modifications: modifications,
            ..CustomizationBundle::default()
        };
        let config = TransformConfig::default();
        let once = transform(&source, &bundle, &config).unwrap();
        let twice = transform(&once.text, &bundle, &config).unwrap();
        prop_assert_eq!(&twice.text, &once.text);
    }

    #[test]
    fn import_is_never_duplicated(
        names in prop::collection::vec(element_name(), 1..4),
        runs in 1usize..4,
    ) {
        let classes = vec![Vec::new(); names.len()];
        let bundle = CustomizationBundle {
            animations: vec![motion_animation()],
            ..CustomizationBundle::default()
        };
        let config = TransformConfig::default();
        let mut text = component(&names, &classes);
        for _ in 0..runs {
            text = transform(&text, &bundle, &config).unwrap().text;
        }
        prop_assert_eq!(text.matches("from \"framer-motion\"").count(), 1);
    }

    #[test]
    fn added_classes_appear_once(
        existing in class_list(4),
        added in class_list(4).prop_filter("non-empty", |c| !c.is_empty()),
    ) {
        let source = format!("const a = <Button className=\"{}\" />;\n", existing.join(" "));
        let bundle = CustomizationBundle {
            code_modifications: vec![CodeModification {
                target: "button".to_string(),
                action: ModificationAction::AddClass,
                value: added.join(" "),
            }],
            ..CustomizationBundle::default()
        };
        let output = transform(&source, &bundle, &TransformConfig::default()).unwrap();
        let start = output.text.find("className=\"").unwrap() + "className=\"".len();
        let end = start + output.text[start..].find('"').unwrap();
        let class_list: Vec<&str> = output.text[start..end].split_whitespace().collect();

        for token in &added {
            prop_assert!(output.text[start..end].contains(token.as_str()));
            if !existing.contains(token) {
                prop_assert!(class_list.iter().filter(|t| **t == token.as_str()).count() <= 1);
            }
        }
        for token in &existing {
            let before = existing.iter().filter(|t| *t == token).count();
            let after = class_list.iter().filter(|t| **t == token.as_str()).count();
            prop_assert_eq!(before, after);
        }
    }
}
