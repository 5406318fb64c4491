use vmlex::{InstList, Released, ScanConfig, Scanner};

fn build(n: usize) -> InstList {
    let mut code = String::new();
    for i in 0..n {
        match i % 3 {
            0 => code.push_str(&format!("label L{}\n", i)),
            1 => code.push_str("push constant 1\n"),
            _ => code.push_str(&format!("call F{} 2\n", i)),
        }
    }
    Scanner::new(code.as_bytes(), ScanConfig::default())
        .scan()
        .finish()
        .unwrap()
}

fn names(n: usize) -> usize {
    (0..n).filter(|i| i % 3 != 1).count()
}

#[test]
fn empty() {
    assert_eq!(InstList::new().destroy(), Released::default());
}

#[test]
fn small() {
    for n in [1, 2, 3, 10] {
        let list = build(n);
        assert_eq!(list.len(), n);
        assert_eq!(
            list.destroy(),
            Released {
                insts: n,
                names: names(n),
            }
        );
    }
}

#[test]
fn large() {
    let n = 300_000;
    let list = build(n);
    assert_eq!(list.len(), n);
    assert_eq!(
        list.destroy(),
        Released {
            insts: n,
            names: names(n),
        }
    );
}

#[test]
fn iterates_in_source_order() {
    let list = build(6);
    let text: Vec<String> = (&list).into_iter().map(|inst| inst.to_string()).collect();
    assert_eq!(
        text,
        vec![
            "label L0",
            "push constant 1",
            "call F2 2",
            "label L3",
            "push constant 1",
            "call F5 2",
        ]
    );
    let owned: Vec<_> = list.into_iter().collect();
    assert_eq!(owned.len(), 6);
}

#[test]
fn yaml_stream() {
    let list = build(3);
    let yaml = serde_yaml::to_string(&list).unwrap();
    assert!(yaml.contains("Label"));
    assert!(yaml.contains("L0"));
    assert!(yaml.contains("constant"));
}
