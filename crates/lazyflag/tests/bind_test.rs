//! End-to-end binding through #[derive(Record)]

use lazyflag::{
    object_bind, string_load, upper_snake, Alias, BoxError, Error, Field, Loader, LoaderAttr,
    Record, Slot, TextDecode,
};
use serde_json::json;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;

fn getter(pairs: &[(&str, &str)]) -> impl FnMut(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[allow(non_snake_case)]
#[derive(Record, Debug, Default)]
struct Person {
    Name: String,
    IpAddress: String,
    #[bind(json = "name_info")]
    NInfo: String,
    #[bind(json = "age")]
    Age: i32,
}

#[test]
fn test_string_load_with_alias() {
    let mut person = Person::default();
    string_load(
        getter(&[
            ("name", "jesko"),
            ("ip_address", "127.0.0.1"),
            ("name_info", "this is info"),
            ("vage", "23"),
        ]),
        &LoaderAttr::new("", None),
        &mut person,
        Some(&Alias::from([("age", "vage")])),
    )
    .unwrap();

    assert_eq!(person.Name, "jesko");
    assert_eq!(person.IpAddress, "127.0.0.1");
    assert_eq!(person.NInfo, "this is info");
    assert_eq!(person.Age, 23);
}

#[derive(Record, Debug, Default)]
struct Info {
    #[bind(yaml = "iname")]
    name: String,
}

#[derive(Record, Debug, Default)]
struct Document {
    id: String,
    info: Info,
    from: String,
}

#[test]
fn test_object_bind_with_dotted_alias() {
    let data = json!({
        "id": "1234",
        "info": {"ename": "jesko"},
        "from": "ca",
    });
    let mut doc = Document::default();
    object_bind(
        data.as_object().unwrap(),
        &mut doc,
        &LoaderAttr::new("yaml", None),
        Some(&Alias::from([("info.iname", "ename")])),
    )
    .unwrap();

    assert_eq!(doc.id, "1234");
    assert_eq!(doc.info.name, "jesko");
    assert_eq!(doc.from, "ca");
}

#[test]
fn test_object_bind_without_alias_uses_tag() {
    let data = json!({"info": {"iname": "direct", "name": "ignored"}});
    let mut doc = Document::default();
    object_bind(data.as_object().unwrap(), &mut doc, &LoaderAttr::new("yaml", None), None).unwrap();
    assert_eq!(doc.info.name, "direct");
}

/// Log level decoded through its own text capability
#[derive(Debug, Default, PartialEq, Eq)]
enum Level {
    #[default]
    Info,
    Debug,
}

#[derive(Debug)]
struct UnknownLevel(String);

impl std::fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown level `{}`", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl TextDecode for Level {
    fn decode_text(&mut self, text: &str) -> Result<(), BoxError> {
        *self = match text {
            "info" => Level::Info,
            "debug" => Level::Debug,
            other => return Err(Box::new(UnknownLevel(other.to_string()))),
        };
        Ok(())
    }
}

impl Field for Level {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Text(self)
    }
}

#[derive(Record, Debug, Default)]
struct Tls {
    cert_path: String,
    insecure: bool,
}

#[derive(Record, Debug)]
struct ServerOpts {
    #[bind(short = "n", required)]
    name: String,
    #[bind(json = "listen", short = "p")]
    port: u16,
    addr: IpAddr,
    level: Level,
    verbose: bool,
    ratio: f32,
    tls: Box<Tls>,
    #[bind(skip)]
    history: Vec<String>,
    r#type: String,
}

impl Default for ServerOpts {
    fn default() -> Self {
        Self {
            name: String::new(),
            port: 80,
            addr: IpAddr::from([0, 0, 0, 0]),
            level: Level::Info,
            verbose: false,
            ratio: 1.0,
            tls: Box::default(),
            history: Vec::new(),
            r#type: String::new(),
        }
    }
}

fn bind_args(args: &[&str]) -> Result<ServerOpts, Error> {
    let loader = Loader::from_args(args)?;
    let mut opts = ServerOpts::default();
    loader.bind(&mut opts)?;
    Ok(opts)
}

#[test]
fn test_token_bind_full() {
    let opts = bind_args(&[
        "-n", "edge", "--listen", "8443", "--addr", "10.1.2.3", "--level", "debug", "--verbose",
        "--ratio", "0.75", "--cert_path", "/etc/tls.pem", "--insecure", "--type", "proxy",
    ])
    .unwrap();

    assert_eq!(opts.name, "edge");
    assert_eq!(opts.port, 8443);
    assert_eq!(opts.addr, IpAddr::from([10, 1, 2, 3]));
    assert_eq!(opts.level, Level::Debug);
    assert!(opts.verbose);
    assert_eq!(opts.ratio, 0.75);
    assert_eq!(opts.tls.cert_path, "/etc/tls.pem");
    assert!(opts.tls.insecure);
    assert_eq!(opts.r#type, "proxy");
    assert!(opts.history.is_empty());
}

#[test]
fn test_token_bind_defaults_survive() {
    let opts = bind_args(&["--name", "edge"]).unwrap();
    assert_eq!(opts.port, 80);
    assert_eq!(opts.ratio, 1.0);
    assert_eq!(opts.level, Level::Info);
    assert!(!opts.verbose);
}

#[test]
fn test_token_bind_required_missing() {
    let err = bind_args(&["--listen", "1"]).unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[test]
fn test_token_bind_duplicate_flag() {
    let err = bind_args(&["--name", "--name", "x"]).unwrap_err();
    assert!(matches!(err, Error::Duplicate));
}

#[test]
fn test_token_bind_text_decoder_error_is_verbatim() {
    let err = bind_args(&["--name", "a", "--level", "loud"]).unwrap_err();
    assert_eq!(err.to_string(), "unknown level `loud`");
}

#[test]
fn test_token_bind_text_field_with_two_values() {
    let err = bind_args(&["--name", "a", "--level", "info", "debug"]).unwrap_err();
    assert!(matches!(err, Error::Duplicate));
}

#[test]
fn test_token_bind_out_of_range() {
    let err = bind_args(&["--name", "a", "--listen", "70000"]).unwrap_err();
    assert!(matches!(err, Error::ParseInt(_)));
}

#[derive(Record, Debug, Default)]
struct WithList {
    name: String,
    peers: Vec<String>,
}

#[test]
fn test_unsupported_kind_is_named() {
    let loader = Loader::from_args(["--name", "a"]).unwrap();
    let err = loader.bind(&mut WithList::default()).unwrap_err();
    assert_eq!(err.to_string(), "type not support slice");
}

#[derive(Record, Debug, Default)]
struct EnvConfig {
    database_url: String,
    pool_size: u32,
    debug: bool,
}

#[test]
fn test_string_load_env_style_keys() {
    let attr = LoaderAttr::new("env", Some(Arc::new(upper_snake)));
    let mut config = EnvConfig::default();
    string_load(
        getter(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("POOL_SIZE", "16"),
            ("DEBUG", "true"),
        ]),
        &attr,
        &mut config,
        None,
    )
    .unwrap();
    assert_eq!(config.database_url, "postgres://localhost/app");
    assert_eq!(config.pool_size, 16);
    assert!(config.debug);
}

#[test]
fn test_string_load_flat_nested_namespace() {
    let mut opts = ServerOpts::default();
    string_load(
        getter(&[("name", "svc"), ("cert_path", "/tls"), ("insecure", "false")]),
        &LoaderAttr::default(),
        &mut opts,
        None,
    )
    .unwrap();
    assert_eq!(opts.tls.cert_path, "/tls");
    assert!(!opts.tls.insecure);
}

#[test]
fn test_derived_field_table() {
    let opts = ServerOpts::default();
    let names: Vec<&str> = opts.fields().iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        ["name", "port", "addr", "level", "verbose", "ratio", "tls", "type"]
    );
    assert_eq!(opts.fields()[1].tag("json"), Some("listen"));
    assert_eq!(opts.fields()[0].short, Some("n"));
    assert!(opts.fields()[0].required);
}

#[test]
fn test_token_bind_custom_tag_name_flat_nesting() {
    let loader = Loader::from_args(["--id", "7", "--iname", "jesko", "--from", "ca"])
        .unwrap()
        .with_attr(LoaderAttr::new("yaml", None));
    let mut doc = Document::default();
    loader.bind(&mut doc).unwrap();
    assert_eq!(doc.id, "7");
    assert_eq!(doc.info.name, "jesko");
    assert_eq!(doc.from, "ca");
}

#[test]
fn test_token_bind_alias() {
    let mut loader = Loader::from_args(["--identifier", "42"]).unwrap();
    loader.set_attr("yaml", None);
    let mut doc = Document::default();
    loader
        .bind_with_alias(&mut doc, Some(&Alias::from([("id", "identifier")])))
        .unwrap();
    assert_eq!(doc.id, "42");
}

#[derive(Record, Debug, Default)]
struct Ratio {
    ratio: f32,
}

#[test]
fn test_float_overflow_rejected_by_every_binder() {
    let loader = Loader::from_args(["--ratio", "1e40"]).unwrap();
    let mut ratio = Ratio::default();
    let err = loader.bind(&mut ratio).unwrap_err();
    assert!(matches!(err, Error::FloatRange(_)));
    assert_eq!(ratio.ratio, 0.0);

    let err = string_load(getter(&[("ratio", "1e40")]), &LoaderAttr::default(), &mut ratio, None)
        .unwrap_err();
    assert!(matches!(err, Error::FloatRange(_)));

    let data = json!({"ratio": 1e300});
    let err = object_bind(data.as_object().unwrap(), &mut ratio, &LoaderAttr::default(), None)
        .unwrap_err();
    assert!(matches!(err, Error::FloatRange(_)));
    assert_eq!(ratio.ratio, 0.0);
}

#[derive(Record, Debug, Default)]
struct WithMap {
    name: String,
    labels: HashMap<String, String>,
}

#[derive(Record, Debug, Default)]
struct WithOption {
    name: String,
    nickname: Option<String>,
}

#[test]
fn test_string_load_unsupported_kind_is_named() {
    let mut record = WithList::default();
    let err = string_load(getter(&[("name", "a")]), &LoaderAttr::default(), &mut record, None)
        .unwrap_err();
    assert_eq!(err.to_string(), "type not support slice");
    assert_eq!(record.name, "a");

    let err = string_load(getter(&[]), &LoaderAttr::default(), &mut WithOption::default(), None)
        .unwrap_err();
    assert_eq!(err.to_string(), "type not support option");
}

#[test]
fn test_object_bind_unsupported_kind_is_named() {
    let data = json!({"name": "a", "labels": {"env": "prod"}});
    let mut record = WithMap::default();
    let err = object_bind(data.as_object().unwrap(), &mut record, &LoaderAttr::default(), None)
        .unwrap_err();
    assert_eq!(err.to_string(), "type not support map");
    assert_eq!(record.name, "a");

    let data = json!({});
    let err = object_bind(
        data.as_object().unwrap(),
        &mut WithList::default(),
        &LoaderAttr::default(),
        None,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "type not support slice");
}
