//! Artifact rendering.
//!
//! Pure string building from the final [`ClassModel`]: same model in,
//! byte-identical artifacts out. Nothing here touches the filesystem;
//! the write step lives in [`crate::generate::writer`].

use crate::config::Settings;
use crate::types::{ClassModel, FunctionInfo};

/// The two rendered artifacts of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub header_name: String,
    pub header_text: String,
    pub impl_name: String,
    pub impl_text: String,
}

/// Render both artifacts for a parsed class model.
pub fn render(model: &ClassModel, settings: &Settings) -> Artifacts {
    Artifacts {
        header_name: format!(
            "{}ScriptForward.{}",
            model.class_name, settings.header_extension
        ),
        header_text: render_header(model, settings),
        impl_name: format!(
            "{}ScriptForward.{}",
            model.class_name, settings.impl_extension
        ),
        impl_text: render_implementation(model, settings),
    }
}

/// The overriding prototype and its `-Script` sibling for one function.
pub fn prototype_pair(function: &FunctionInfo) -> String {
    let FunctionInfo {
        name,
        return_type,
        argument_type,
        argument_name,
    } = function;
    format!(
        "  virtual {return_type} {name}({argument_type} {argument_name}) override;\n  \
         virtual {return_type} {name}Script({argument_type} {argument_name});\n"
    )
}

/// The overriding body (script dispatch with native fallback) and the
/// always-native `-Script` body for one function.
pub fn body_pair(class_name: &str, script_object: &str, function: &FunctionInfo) -> String {
    let FunctionInfo {
        name,
        return_type,
        argument_type,
        argument_name,
    } = function;
    format!(
        "{return_type} {class_name}ScriptForward::{name}({argument_type} {argument_name})\n\
         {{\n\
         \x20 if ({script_object}::hasFunction(\"{name}Script\", true))\n\
         \x20   {script_object}::call(\"{name}Script\", {argument_name}, result_);\n\
         \x20 else\n\
         \x20   {class_name}::{name}({argument_name});\n\
         }}\n\
         \n\
         {return_type} {class_name}ScriptForward::{name}Script({argument_type} {argument_name})\n\
         {{\n\
         \x20 {class_name}::{name}({argument_name});\n\
         }}\n\
         \n"
    )
}

/// The registration-table entry exposing `<name>Script` to the scripting side.
pub fn registration_entry(name: &str) -> String {
    format!("\n  .DEF_F({name}Script)")
}

fn include_lines(includes: &[String], extension: &str) -> String {
    let mut lines = String::new();
    for name in includes {
        lines.push_str(&format!("#include \"{name}.{extension}\"\n"));
    }
    lines
}

fn render_header(model: &ClassModel, settings: &Settings) -> String {
    let class = &model.class_name;
    let script_object = &settings.script_object;
    let ext = &settings.header_extension;

    let mut prototypes = String::new();
    for function in &model.functions {
        prototypes.push_str(&prototype_pair(function));
    }

    format!(
        "#ifndef {class}ScriptForward_{ext}_\n\
         #define {class}ScriptForward_{ext}_\n\
         \n\
         #include \"{class}.{ext}\"\n\
         #include \"{script_object}.{ext}\"\n\
         \n\
         class {class}ScriptForward : public {class}, public {script_object}\n\
         {{\n\
         public:\n\
         \x20 {class}ScriptForward();\n\
         \x20 ~{class}ScriptForward();\n\
         \n\
         {prototypes}\n\
         private:\n\
         \x20 {script_object} result_;\n\
         }};\n\
         \n\
         #endif\n"
    )
}

fn render_implementation(model: &ClassModel, settings: &Settings) -> String {
    let class = &model.class_name;
    let script_object = &settings.script_object;
    let registry_include = &settings.registry_include;

    let includes = include_lines(&model.includes, &settings.header_extension);
    let mut implementations = String::new();
    let mut exports = String::new();
    for function in &model.functions {
        implementations.push_str(&body_pair(class, script_object, function));
        exports.push_str(&registration_entry(&function.name));
    }

    format!(
        "\n\
         #include \"{class}ScriptForward.{ext}\"\n\
         {includes}\n\
         #include \"{registry_include}\"\n\
         \n\
         {class}ScriptForward::{class}ScriptForward()\n\
         {{\n\
         }}\n\
         \n\
         {class}ScriptForward::~{class}ScriptForward()\n\
         {{\n\
         }}\n\
         \n\
         {implementations}\n\
         REFLECT_CLASS_DERIVED({class}ScriptForward, {class})\n\
         \x20 .def_c(Reflection::init<>()){exports};\n\
         }}\n",
        ext = settings.header_extension,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_model() -> ClassModel {
        ClassModel {
            class_name: "Foo".to_string(),
            functions: vec![FunctionInfo::new("Bar", "void", "int", "x")],
            includes: vec![],
        }
    }

    #[test]
    fn test_prototype_pair() {
        let function = FunctionInfo::new("Bar", "void", "int", "x");
        assert_eq!(
            prototype_pair(&function),
            "  virtual void Bar(int x) override;\n  virtual void BarScript(int x);\n"
        );
    }

    #[test]
    fn test_body_pair_dispatches_then_falls_back() {
        let function = FunctionInfo::new("Bar", "void", "int", "x");
        let body = body_pair("Foo", "ScriptObject", &function);
        assert_eq!(
            body,
            "void FooScriptForward::Bar(int x)\n\
             {\n\
             \x20 if (ScriptObject::hasFunction(\"BarScript\", true))\n\
             \x20   ScriptObject::call(\"BarScript\", x, result_);\n\
             \x20 else\n\
             \x20   Foo::Bar(x);\n\
             }\n\
             \n\
             void FooScriptForward::BarScript(int x)\n\
             {\n\
             \x20 Foo::Bar(x);\n\
             }\n\
             \n"
        );
    }

    #[test]
    fn test_registration_entry() {
        assert_eq!(registration_entry("Bar"), "\n  .DEF_F(BarScript)");
    }

    #[test]
    fn test_header_artifact_golden() {
        let artifacts = render(&bar_model(), &Settings::default());
        assert_eq!(artifacts.header_name, "FooScriptForward.h");
        assert_eq!(
            artifacts.header_text,
            "#ifndef FooScriptForward_h_\n\
             #define FooScriptForward_h_\n\
             \n\
             #include \"Foo.h\"\n\
             #include \"ScriptObject.h\"\n\
             \n\
             class FooScriptForward : public Foo, public ScriptObject\n\
             {\n\
             public:\n\
             \x20 FooScriptForward();\n\
             \x20 ~FooScriptForward();\n\
             \n\
             \x20 virtual void Bar(int x) override;\n\
             \x20 virtual void BarScript(int x);\n\
             \n\
             private:\n\
             \x20 ScriptObject result_;\n\
             };\n\
             \n\
             #endif\n"
        );
    }

    #[test]
    fn test_implementation_artifact_golden() {
        let artifacts = render(&bar_model(), &Settings::default());
        assert_eq!(artifacts.impl_name, "FooScriptForward.C");
        assert_eq!(
            artifacts.impl_text,
            "\n\
             #include \"FooScriptForward.h\"\n\
             \n\
             #include \"ReflectionRegistry.h\"\n\
             \n\
             FooScriptForward::FooScriptForward()\n\
             {\n\
             }\n\
             \n\
             FooScriptForward::~FooScriptForward()\n\
             {\n\
             }\n\
             \n\
             void FooScriptForward::Bar(int x)\n\
             {\n\
             \x20 if (ScriptObject::hasFunction(\"BarScript\", true))\n\
             \x20   ScriptObject::call(\"BarScript\", x, result_);\n\
             \x20 else\n\
             \x20   Foo::Bar(x);\n\
             }\n\
             \n\
             void FooScriptForward::BarScript(int x)\n\
             {\n\
             \x20 Foo::Bar(x);\n\
             }\n\
             \n\
             \n\
             REFLECT_CLASS_DERIVED(FooScriptForward, Foo)\n\
             \x20 .def_c(Reflection::init<>())\n\
             \x20 .DEF_F(BarScript);\n\
             }\n"
        );
    }

    #[test]
    fn test_forward_declarations_become_includes() {
        let mut model = bar_model();
        model.includes = vec!["Widget".to_string(), "Event".to_string()];
        let artifacts = render(&model, &Settings::default());
        assert!(artifacts.impl_text.contains(
            "#include \"FooScriptForward.h\"\n\
             #include \"Widget.h\"\n\
             #include \"Event.h\"\n\
             \n\
             #include \"ReflectionRegistry.h\"\n"
        ));
    }

    #[test]
    fn test_empty_surface_still_registers_constructor() {
        let model = ClassModel {
            class_name: "Foo".to_string(),
            functions: vec![],
            includes: vec![],
        };
        let artifacts = render(&model, &Settings::default());
        assert!(!artifacts.header_text.contains("virtual"));
        assert!(artifacts.impl_text.contains(
            "REFLECT_CLASS_DERIVED(FooScriptForward, Foo)\n\
             \x20 .def_c(Reflection::init<>());\n\
             }\n"
        ));
        assert!(!artifacts.impl_text.contains(".DEF_F"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let model = bar_model();
        let settings = Settings::default();
        assert_eq!(render(&model, &settings), render(&model, &settings));
    }
}
