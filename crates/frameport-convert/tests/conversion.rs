//! End-to-end conversion behavior against the in-memory scene.

use frameport_convert::{
    clear_generated, AxisPolicy, ConvertError, ConvertOptions, Converter, DiagnosticKind,
    FontRegistry, StyleKind, StyleStrategies,
};
use frameport_core::{parse_document, Color, CornerRadius, DesignNode, Geometry};
use frameport_scene::{
    FillFacet, FontHandle, InteractiveFacet, MemoryScene, ObjectId, Placement, SceneError,
    SceneGraph, TextFacet,
};
use glam::Vec2;

const LOGIN: &str = include_str!("fixtures/login.json");

fn setup() -> (MemoryScene, ObjectId) {
    let mut scene = MemoryScene::new();
    let canvas = scene.create_container("Canvas");
    (scene, canvas)
}

fn child_names(scene: &MemoryScene, parent: ObjectId) -> Vec<String> {
    scene
        .list_children(parent)
        .unwrap()
        .into_iter()
        .map(|(name, _)| name)
        .collect()
}

#[test]
fn test_geometry_under_y_flip() {
    let (mut scene, canvas) = setup();
    let node = DesignNode::frame("f", "Panel").with_geometry(10.0, 20.0, 100.0, 50.0);

    let conversion = Converter::default().convert(&mut scene, &node, canvas).unwrap();
    let placement = scene.get(conversion.root).unwrap().placement.unwrap();
    assert_eq!(placement.position, Vec2::new(10.0, -20.0));
    assert_eq!(placement.size, Vec2::new(100.0, 50.0));
    assert_eq!(placement.anchor, Vec2::new(0.0, 1.0));
    assert_eq!(placement.pivot, Vec2::new(0.0, 1.0));
}

#[test]
fn test_geometry_without_flip() {
    let (mut scene, canvas) = setup();
    let converter = Converter::new(
        ConvertOptions::default().with_axis(AxisPolicy::YDown),
        FontRegistry::default(),
    );
    let node = DesignNode::frame("f", "Panel").with_geometry(10.0, 20.0, 100.0, 50.0);

    let conversion = converter.convert(&mut scene, &node, canvas).unwrap();
    let placement = scene.get(conversion.root).unwrap().placement.unwrap();
    assert_eq!(
        placement,
        Placement::anchored(Vec2::new(10.0, 20.0), Vec2::new(100.0, 50.0), Vec2::ZERO)
    );
}

#[test]
fn test_text_falls_back_to_name() {
    let (mut scene, canvas) = setup();
    let node = DesignNode::text("t", "Label1").with_content("");

    let conversion = Converter::default().convert(&mut scene, &node, canvas).unwrap();
    let text = scene.get(conversion.root).unwrap().text.clone().unwrap();
    assert_eq!(text.content, "Label1");

    let (mut scene, canvas) = setup();
    let absent = DesignNode::text("t", "Label1");
    let conversion = Converter::default().convert(&mut scene, &absent, canvas).unwrap();
    assert_eq!(scene.get(conversion.root).unwrap().text.as_ref().unwrap().content, "Label1");
}

#[test]
fn test_instance_interaction_colors() {
    let (mut scene, canvas) = setup();
    let node = DesignNode::instance("btn", "Button")
        .with_fill(Color::rgba(200, 100, 50, 255))
        .with_child(DesignNode::text("lbl", "Label").with_content("Go"));

    let conversion = Converter::default().convert(&mut scene, &node, canvas).unwrap();
    let object = scene.get(conversion.root).unwrap();
    assert_eq!(
        object.fill,
        Some(FillFacet {
            color: Some(Color::rgba(200, 100, 50, 255))
        })
    );

    let colors = object.interactive.unwrap().colors.unwrap();
    assert_eq!(colors.normal, Color::rgba(200, 100, 50, 255));
    assert_eq!(colors.highlighted, Color::rgba(160, 80, 40, 255));
    assert_eq!(colors.pressed, Color::rgba(120, 60, 30, 255));
}

#[test]
fn test_missing_corner_strategy_reported() {
    let (mut scene, canvas) = setup();
    let node = DesignNode::frame("card", "Card")
        .with_geometry(5.0, 6.0, 70.0, 80.0)
        .with_fill(Color::rgb(9, 9, 9))
        .with_corner_radius(CornerRadius::new(8.0, 0.0, 0.0, 0.0));

    let conversion = Converter::default().convert(&mut scene, &node, canvas).unwrap();
    assert_eq!(
        conversion.report.unsupported_styles().collect::<Vec<_>>(),
        [("card", StyleKind::RoundedCorners)]
    );
    assert!(!conversion.report.has_errors());

    let object = scene.get(conversion.root).unwrap();
    let placement = object.placement.unwrap();
    assert_eq!(placement.position, Vec2::new(5.0, -6.0));
    assert_eq!(placement.size, Vec2::new(70.0, 80.0));
    assert_eq!(object.fill.unwrap().color, Some(Color::rgb(9, 9, 9)));
    assert!(object.styles.is_empty());
}

#[test]
fn test_forest_with_invalid_middle_root() {
    let (mut scene, canvas) = setup();
    let roots = vec![
        DesignNode::frame("r1", "First").with_child(DesignNode::text("r1-t", "A")),
        DesignNode::frame("r2", "Second")
            .with_geometry(0.0, 0.0, -10.0, 10.0)
            .with_child(DesignNode::text("r2-t", "B")),
        DesignNode::frame("r3", "Third").with_child(DesignNode::text("r3-t", "C")),
    ];

    let forest = Converter::default().convert_forest(&mut scene, &roots, canvas);

    assert_eq!(forest.outcomes.len(), 3);
    assert!(forest.outcomes[0].is_ok());
    assert!(matches!(
        forest.outcomes[1],
        Err(ConvertError::InvalidInput { ref id, .. }) if id == "r2"
    ));
    assert!(forest.outcomes[2].is_ok());

    for id in ["r1", "r1-t", "r3", "r3-t"] {
        assert!(forest.index.contains(id), "{id} missing from index");
    }
    assert!(!forest.index.contains("r2"));
    assert!(!forest.index.contains("r2-t"));

    assert_eq!(child_names(&scene, canvas), ["Design_First", "Design_Third"]);
    assert_eq!(scene.descendant_count(canvas), 4);

    let errors: Vec<_> = forest.report.diagnostics().iter().filter(|d| d.is_error()).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].node_id, "r2");
    assert!(matches!(errors[0].kind, DiagnosticKind::InvalidInput(_)));
}

#[test]
fn test_forest_rejects_ids_reused_across_roots() {
    let (mut scene, canvas) = setup();
    let roots = vec![DesignNode::frame("same", "One"), DesignNode::frame("same", "Two")];

    let forest = Converter::default().convert_forest(&mut scene, &roots, canvas);
    assert_eq!(forest.converted_roots().count(), 1);
    assert_eq!(forest.failures().count(), 1);
    assert_eq!(child_names(&scene, canvas), ["Design_One"]);
}

#[test]
fn test_clear_then_convert_is_idempotent() {
    let (mut scene, canvas) = setup();
    let doc = parse_document(LOGIN).unwrap();
    let converter = Converter::default();

    let first = converter.convert_forest(&mut scene, &doc.nodes, canvas);
    let before = scene.snapshot(canvas).unwrap();
    let first_handles: Vec<ObjectId> = first.index.handles().collect();

    let removed = clear_generated(&mut scene, canvas, &converter.options().name_prefix).unwrap();
    assert_eq!(removed, 1);
    assert_eq!(scene.len(), 1);
    assert!(first_handles.iter().all(|h| !scene.contains(*h)));

    let second = converter.convert_forest(&mut scene, &doc.nodes, canvas);
    let after = scene.snapshot(canvas).unwrap();

    assert_eq!(before, after);
    assert_eq!(first.report, second.report);
    assert_eq!(
        first.index.ids().collect::<Vec<_>>(),
        second.index.ids().collect::<Vec<_>>()
    );
}

#[test]
fn test_regenerate_keeps_foreign_children() {
    let (mut scene, canvas) = setup();
    let camera = scene.create_object("Camera").unwrap();
    scene.set_parent(camera, canvas).unwrap();

    let roots = vec![DesignNode::frame("a", "A"), DesignNode::frame("b", "B")];
    let converter = Converter::default();
    converter.regenerate(&mut scene, &roots, canvas).unwrap();
    converter.regenerate(&mut scene, &roots, canvas).unwrap();

    assert_eq!(child_names(&scene, canvas), ["Camera", "Design_A", "Design_B"]);
}

#[test]
fn test_login_fixture() {
    let (mut scene, canvas) = setup();
    let doc = parse_document(LOGIN).unwrap();
    let fonts = FontRegistry::default().with_font("Inter", FontHandle::new("Inter-Regular.ttf"));
    let converter = Converter::new(ConvertOptions::default(), fonts);

    let forest = converter.convert_forest(&mut scene, &doc.nodes, canvas);
    assert_eq!(forest.index.len(), 6);
    assert!(!forest.report.has_errors());

    let screen = forest.index.get("1:1").unwrap();
    assert_eq!(
        child_names(&scene, screen),
        [
            "Design_Title",
            "Design_EmailField",
            "Design_SubmitButton",
            "Design_Divider"
        ]
    );

    let title = scene.get(forest.index.get("1:2").unwrap()).unwrap();
    assert_eq!(
        title.text,
        Some(TextFacet {
            content: "Welcome back".into(),
            color: Some(Color::rgb(0x1A, 0x1A, 0x1A)),
            font_size: Some(28),
            font: FontHandle::new("Inter-Regular.ttf"),
            alignment: Default::default(),
        })
    );

    let label = scene.get(forest.index.get("1:5").unwrap()).unwrap();
    let label_text = label.text.as_ref().unwrap();
    assert_eq!(label_text.content, "SubmitLabel");
    assert_eq!(label_text.font_size, None);
    assert_eq!(label_text.font.as_str(), frameport_convert::DEFAULT_FONT);

    let button = scene.get(forest.index.get("1:4").unwrap()).unwrap();
    assert!(button.interactive.unwrap().colors.is_some());

    let divider = scene.get(forest.index.get("1:6").unwrap()).unwrap();
    assert!(divider.fill.is_none());
    assert_eq!(divider.placement.unwrap().position, Vec2::new(24.0, -340.0));

    let mut styles: Vec<(String, StyleKind)> = forest
        .report
        .unsupported_styles()
        .map(|(id, kind)| (id.to_string(), kind))
        .collect();
    styles.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        styles,
        [
            ("1:3".to_string(), StyleKind::RoundedCorners),
            ("1:3".to_string(), StyleKind::Border),
            ("1:4".to_string(), StyleKind::Shadow),
        ]
    );
    assert!(forest.report.for_node("1:5").any(|d| matches!(
        &d.kind,
        DiagnosticKind::MissingFontMapping { family } if family == "Unmapped Sans"
    )));
}

#[test]
fn test_login_fixture_with_recorded_styles() {
    let (mut scene, canvas) = setup();
    let doc = parse_document(LOGIN).unwrap();
    let converter = Converter::default().with_styles(StyleStrategies::recording());

    let forest = converter.convert_forest(&mut scene, &doc.nodes, canvas);
    assert_eq!(forest.report.unsupported_styles().count(), 0);

    let field = scene.get(forest.index.get("1:3").unwrap()).unwrap();
    assert_eq!(field.styles.len(), 2);
    let button = scene.get(forest.index.get("1:4").unwrap()).unwrap();
    assert_eq!(button.styles.len(), 1);
}

/// Which scene operation to refuse for the named object.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Refuse {
    Create,
    Parent,
}

/// A scene that refuses one operation for objects with a particular name.
struct RefusingScene {
    inner: MemoryScene,
    refuse: &'static str,
    operation: Refuse,
}

impl RefusingScene {
    fn new(operation: Refuse, refuse: &'static str) -> (Self, ObjectId) {
        let mut inner = MemoryScene::new();
        let canvas = inner.create_container("Canvas");
        let scene = Self {
            inner,
            refuse,
            operation,
        };
        (scene, canvas)
    }

    fn refuses(&self, operation: Refuse, name: &str) -> bool {
        self.operation == operation && name == self.refuse
    }
}

impl SceneGraph for RefusingScene {
    type Handle = ObjectId;

    fn create_object(&mut self, name: &str) -> Result<ObjectId, SceneError> {
        if self.refuses(Refuse::Create, name) {
            return Err(SceneError::Rejected(format!("refusing {name}")));
        }
        self.inner.create_object(name)
    }

    fn set_parent(&mut self, handle: ObjectId, parent: ObjectId) -> Result<(), SceneError> {
        let name = self.inner.get(handle).map(|o| o.name.as_str()).unwrap_or_default();
        if self.refuses(Refuse::Parent, name) {
            return Err(SceneError::Rejected(format!("not parenting {name}")));
        }
        self.inner.set_parent(handle, parent)
    }

    fn set_placement(&mut self, handle: ObjectId, placement: &Placement) -> Result<(), SceneError> {
        self.inner.set_placement(handle, placement)
    }

    fn attach_fill_facet(&mut self, handle: ObjectId, facet: &FillFacet) -> Result<(), SceneError> {
        self.inner.attach_fill_facet(handle, facet)
    }

    fn attach_text_facet(&mut self, handle: ObjectId, facet: &TextFacet) -> Result<(), SceneError> {
        self.inner.attach_text_facet(handle, facet)
    }

    fn attach_interactive_facet(
        &mut self,
        handle: ObjectId,
        facet: &InteractiveFacet,
    ) -> Result<(), SceneError> {
        self.inner.attach_interactive_facet(handle, facet)
    }

    fn destroy_object(&mut self, handle: ObjectId) -> Result<(), SceneError> {
        self.inner.destroy_object(handle)
    }

    fn list_children(&self, container: ObjectId) -> Result<Vec<(String, ObjectId)>, SceneError> {
        self.inner.list_children(container)
    }
}

#[test]
fn test_collaborator_failure_rolls_back_root() {
    let (mut scene, canvas) = RefusingScene::new(Refuse::Create, "Design_Broken");

    let roots = vec![
        DesignNode::frame("ok", "Fine").with_child(DesignNode::text("ok-t", "T")),
        DesignNode::frame("bad", "Parent")
            .with_child(DesignNode::frame("good-child", "Kid"))
            .with_child(DesignNode::frame("broken", "Broken")),
        DesignNode::frame("after", "After"),
    ];

    let converter = Converter::default();
    let forest = converter.convert_forest(&mut scene, &roots, canvas);

    assert!(forest.outcomes[0].is_ok());
    assert!(matches!(
        &forest.outcomes[1],
        Err(ConvertError::Collaborator { id, source: SceneError::Rejected(_) }) if id == "broken"
    ));
    assert!(forest.outcomes[2].is_ok());

    assert_eq!(child_names(&scene.inner, canvas), ["Design_Fine", "Design_After"]);
    assert_eq!(scene.inner.len(), 4);
    assert_eq!(forest.index.ids().collect::<Vec<_>>(), ["ok-t", "ok", "after"]);
    assert!(forest.index.handles().all(|handle| scene.inner.contains(handle)));
}

#[test]
fn test_single_convert_collaborator_failure() {
    let (mut scene, canvas) = RefusingScene::new(Refuse::Create, "Design_Leaf");
    let root = DesignNode::frame("root", "Root").with_child(DesignNode::frame("leaf", "Leaf"));

    let err = Converter::default().convert(&mut scene, &root, canvas).unwrap_err();
    assert_eq!(err.node_id(), "leaf");
    assert!(scene.inner.children(canvas).is_empty());
    assert_eq!(scene.inner.len(), 1);
}

#[test]
fn test_unparented_child_is_discarded() {
    let (mut scene, canvas) = RefusingScene::new(Refuse::Parent, "Design_Leaf");
    let root = DesignNode::frame("root", "Root")
        .with_child(DesignNode::frame("sibling", "Sibling"))
        .with_child(DesignNode::frame("leaf", "Leaf"));

    let err = Converter::default().convert(&mut scene, &root, canvas).unwrap_err();
    assert_eq!(err.node_id(), "leaf");
    assert!(matches!(
        err,
        ConvertError::Collaborator {
            source: SceneError::Rejected(_),
            ..
        }
    ));
    let leftovers: Vec<&str> = scene.inner.objects().map(|(_, o)| o.name.as_str()).collect();
    assert_eq!(leftovers, ["Canvas"]);
}

#[test]
fn test_unparented_root_is_discarded() {
    let (mut scene, canvas) = RefusingScene::new(Refuse::Parent, "Design_Second");
    let roots = vec![
        DesignNode::frame("first", "First"),
        DesignNode::frame("second", "Second").with_child(DesignNode::text("t", "T")),
        DesignNode::frame("third", "Third"),
    ];

    let forest = Converter::default().convert_forest(&mut scene, &roots, canvas);
    assert_eq!(forest.failures().count(), 1);
    assert_eq!(forest.failures().next().map(|e| e.node_id()), Some("second"));
    assert_eq!(child_names(&scene.inner, canvas), ["Design_First", "Design_Third"]);
    assert_eq!(scene.inner.len(), 3);
    assert_eq!(forest.index.ids().collect::<Vec<_>>(), ["first", "third"]);
}

#[test]
fn test_invalid_parent_handle() {
    let (mut scene, canvas) = setup();
    scene.destroy_object(canvas).unwrap();

    let err = Converter::default()
        .convert(&mut scene, &DesignNode::frame("f", "F"), canvas)
        .unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Collaborator {
            source: SceneError::InvalidHandle(_),
            ..
        }
    ));
    assert!(scene.is_empty());
}

#[test]
fn test_geometry_is_copied_not_rescaled() {
    let (mut scene, canvas) = setup();
    let mut node = DesignNode::rectangle("r", "R");
    node.geometry = Geometry::new(0.5, 0.25, 0.0, 0.0);

    let conversion = Converter::default().convert(&mut scene, &node, canvas).unwrap();
    let placement = scene.get(conversion.root).unwrap().placement.unwrap();
    assert_eq!(placement.position, Vec2::new(0.5, -0.25));
    assert_eq!(placement.size, Vec2::ZERO);
}
