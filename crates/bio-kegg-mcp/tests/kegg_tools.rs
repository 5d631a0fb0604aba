//! Tool behavior against recorded KEGG records.

mod common;

use std::sync::Arc;

use serde_json::{json, Value};

use bio_kegg_mcp::tools::{self, ToolRegistry};

use common::{MockKegg, Mode};

/// Call a tool directly through the registry and executor; return its text blocks.
async fn call(source: &MockKegg, name: &str, args: Value) -> Vec<String> {
    let registry = ToolRegistry::kegg().unwrap();
    let tool = registry.resolve(name).unwrap();
    tools::execute(tool, args, source)
        .await
        .content
        .iter()
        .map(|block| block.as_text().to_string())
        .collect()
}

#[tokio::test]
async fn test_pathway_info() {
    let source = MockKegg::with_fixtures();
    let blocks = call(&source, "kegg_pathway_info", json!({"pathway_id": "path:hsa00010"})).await;

    assert_eq!(blocks.len(), 2);
    assert_eq!(
        blocks[0],
        "KEGG Pathway: hsa00010\n\
         Name: Glycolysis / Gluconeogenesis - Homo sapiens (human)\n\
         Description: Glycolysis is the process of converting glucose into pyruvate and generating small amounts of ATP (energy) and NADH (reducing power).\n\
         Class: Metabolism; Carbohydrate metabolism\n\
         Genes: 12 genes\n\
         Compounds: 4 compounds"
    );

    let sample: Vec<&str> = blocks[1].lines().collect();
    assert_eq!(sample.len(), 11);
    assert_eq!(sample[0], "Sample genes (first 10):");
    assert_eq!(sample[1], "3101: HK3; hexokinase 3 [KO:K00844] [EC:2.7.1.1]");
    assert_eq!(sample[10], "2203: FBP1; fructose-bisphosphatase 1 [KO:K03841] [EC:3.1.3.11]");
    assert!(!blocks[1].contains("8789"));
    assert_eq!(source.calls(), ["get/hsa00010"]);
}

#[tokio::test]
async fn test_pathway_prefixes_are_stripped() {
    let source = MockKegg::new();
    for (raw, bare) in [
        ("pathway:map00010", "map00010"),
        ("path:map00010", "map00010"),
        ("map:00010", "00010"),
        ("map00010", "map00010"),
    ] {
        let blocks = call(&source, "kegg_pathway_info", json!({"pathway_id": raw})).await;
        assert_eq!(blocks, [format!("Pathway not found: {bare}")]);
    }
}

#[tokio::test]
async fn test_compound_info() {
    let source = MockKegg::with_fixtures();
    let blocks = call(&source, "kegg_compound_info", json!({"compound_id": "cpd:C00002"})).await;
    assert_eq!(
        blocks,
        ["KEGG Compound: C00002\n\
          Name: ATP\n\
          Formula: C10H16N5O13P3\n\
          Mass: 506.9957\n\
          Comment: \n\
          Pathways: 3 pathways\n\
          Enzymes: 6 enzymes"]
    );
    assert_eq!(source.calls(), ["get/C00002"]);
}

#[tokio::test]
async fn test_enzyme_info_looks_up_the_ec_database() {
    let source = MockKegg::with_fixtures();
    for raw in ["ec:1.1.1.1", "enzyme:1.1.1.1", "1.1.1.1"] {
        let blocks = call(&source, "kegg_enzyme_info", json!({"enzyme_id": raw})).await;
        assert_eq!(blocks.len(), 1);
        let text = &blocks[0];
        assert!(text.starts_with("KEGG Enzyme: 1.1.1.1\nName: alcohol dehydrogenase\n"));
        assert!(text.contains(
            "\nClass: Oxidoreductases; Acting on the CH-OH group of donors; With NAD+ or NADP+ as acceptor\n"
        ));
        assert!(text.contains(
            "\nSubstrate: primary alcohol [CPD:C00226]; NAD+ [CPD:C00003]; secondary alcohol [CPD:C01612]\n"
        ));
        assert!(text.contains("\nProduct: aldehyde [CPD:C00071]; NADH [CPD:C00004]; ketone [CPD:C01450]; H+ [CPD:C00080]\n"));
        assert!(text.ends_with(
            "Comment: A zinc protein. Acts on primary or secondary alcohols or hemi-acetals with very broad specificity."
        ));
    }
    assert_eq!(source.calls(), ["get/ec:1.1.1.1"; 3]);
}

#[tokio::test]
async fn test_enzyme_not_found() {
    let blocks = call(&MockKegg::new(), "kegg_enzyme_info", json!({"enzyme_id": "ec:9.9.9.9"})).await;
    assert_eq!(blocks, ["Enzyme not found: 9.9.9.9"]);
}

#[tokio::test]
async fn test_search_compounds() {
    let source = MockKegg::with_fixtures();
    let blocks = call(&source, "kegg_search_compounds", json!({"query": "ATP"})).await;
    assert_eq!(
        blocks,
        ["Search results for 'ATP' (first 20):\n\
          cpd:C00002: ATP; Adenosine 5'-triphosphate\n\
          cpd:C00008: ADP; Adenosine 5'-diphosphate\n\
          cpd:C00020: AMP; Adenosine 5'-monophosphate; Adenylic acid\n\
          cpd:C00575: 3',5'-Cyclic AMP; cAMP"]
    );
    assert_eq!(source.calls(), ["find/compound/ATP"]);
}

#[tokio::test]
async fn test_search_other_database_and_no_hits() {
    let source = MockKegg::new().find("drug", "aspirin", "dr:D00109\tAspirin (JP18/USP)\n");
    let blocks = call(&source, "kegg_search_compounds", json!({"query": "aspirin", "database": "drug"})).await;
    assert_eq!(blocks, ["Search results for 'aspirin' (first 20):\ndr:D00109: Aspirin (JP18/USP)"]);

    let blocks = call(&source, "kegg_search_compounds", json!({"query": "unobtainium", "database": null})).await;
    assert_eq!(blocks, ["No compounds found for query: unobtainium"]);
    assert_eq!(source.calls(), ["find/drug/aspirin", "find/compound/unobtainium"]);
}

#[tokio::test]
async fn test_find_pathways_by_compound() {
    let source = MockKegg::with_fixtures();
    let blocks = call(&source, "kegg_find_pathways_by_compound", json!({"compound_id": "compound:C00002"})).await;
    assert_eq!(
        blocks,
        ["Pathways containing compound C00002:\n\
          map00190: Oxidative phosphorylation\n\
          map00230: Purine metabolism\n\
          map01100: Metabolic pathways"]
    );
}

#[tokio::test]
async fn test_find_pathways_edge_outcomes() {
    let source = MockKegg::new().entry("C00001", "ENTRY       C00001                      Compound\nNAME        H2O\n///\n");
    let blocks = call(&source, "kegg_find_pathways_by_compound", json!({"compound_id": "C00001"})).await;
    assert_eq!(blocks, ["No pathways found for compound: C00001"]);

    let blocks = call(&source, "kegg_find_pathways_by_compound", json!({"compound_id": "C77777"})).await;
    assert_eq!(blocks, ["Compound not found: C77777"]);
}

#[tokio::test]
async fn test_list_organisms() {
    let source = MockKegg::with_fixtures();
    let blocks = call(&source, "kegg_list_organisms", json!({})).await;
    assert_eq!(
        blocks,
        ["KEGG Organisms (first 50):\n\
          hsa: Homo sapiens (human)\n\
          ptr: Pan troglodytes (chimpanzee)\n\
          mmu: Mus musculus (house mouse)\n\
          sce: Saccharomyces cerevisiae S288C\n\
          eco: Escherichia coli K-12 MG1655"]
    );

    let blocks = call(&source, "kegg_list_organisms", json!({"filter": "HUMAN"})).await;
    assert_eq!(blocks, ["KEGG Organisms (filtered by 'HUMAN') (first 50):\nhsa: Homo sapiens (human)"]);

    // matches codes as well as names
    let blocks = call(&source, "kegg_list_organisms", json!({"filter": "SA"})).await;
    assert_eq!(
        blocks,
        ["KEGG Organisms (filtered by 'SA') (first 50):\nhsa: Homo sapiens (human)\nsce: Saccharomyces cerevisiae S288C"]
    );

    let blocks = call(&source, "kegg_list_organisms", json!({"filter": "eco"})).await;
    assert_eq!(blocks, ["KEGG Organisms (filtered by 'eco') (first 50):\neco: Escherichia coli K-12 MG1655"]);
}

#[tokio::test]
async fn test_list_organisms_empty() {
    let blocks = call(&MockKegg::new(), "kegg_list_organisms", Value::Null).await;
    assert_eq!(
        blocks,
        ["Error listing organisms: Invalid argument: arguments must be an object, got null"]
    );

    let blocks = call(&MockKegg::new(), "kegg_list_organisms", json!({"filter": null})).await;
    assert_eq!(blocks, ["No organisms found"]);
}

#[tokio::test]
async fn test_malformed_record_is_a_labelled_block() {
    let source = MockKegg::new().entry("C00002", "this is not a flat file\n");
    let blocks = call(&source, "kegg_compound_info", json!({"compound_id": "C00002"})).await;
    assert_eq!(blocks, ["Error retrieving compound info: Parse error: missing ENTRY field"]);
}

#[tokio::test]
async fn test_wrong_argument_type_is_a_labelled_block() {
    let blocks = call(&MockKegg::new(), "kegg_compound_info", json!({"compound_id": 2})).await;
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].starts_with("Error retrieving compound info: Invalid argument: invalid type: integer `2`"));
}

#[tokio::test]
async fn test_every_tool_labels_source_failures() {
    let source = Arc::new(MockKegg::with_fixtures().mode(Mode::Failing));
    let cases = [
        ("kegg_pathway_info", json!({"pathway_id": "hsa00010"}), "Error retrieving pathway info: "),
        ("kegg_compound_info", json!({"compound_id": "C00002"}), "Error retrieving compound info: "),
        ("kegg_enzyme_info", json!({"enzyme_id": "1.1.1.1"}), "Error retrieving enzyme info: "),
        ("kegg_search_compounds", json!({"query": "ATP"}), "Error searching compounds: "),
        ("kegg_find_pathways_by_compound", json!({"compound_id": "C00002"}), "Error finding pathways: "),
        ("kegg_list_organisms", json!({}), "Error listing organisms: "),
    ];
    for (name, args, label) in cases {
        let blocks = call(&source, name, args).await;
        assert_eq!(blocks.len(), 1, "{name}");
        assert!(blocks[0].starts_with(label), "{name}: {}", blocks[0]);
        assert!(blocks[0].contains("upstream hung up"), "{name}");
    }
}
