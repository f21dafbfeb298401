use jsend::payload::{ColumnTable, RowGroup, Submission};

#[test]
fn sample_record_has_the_expected_encoding() {
    let encoded = serde_json::to_string(&Submission::sample()).unwrap();
    assert_eq!(
        encoded,
        r#"{"cmd_name":"Test Command","data":"Some data","range":"0-100","status":"OK","input_other":["Input 1","Input 2"],"output_other":["Output 1","Output 2"]}"#
    );
}

#[test]
fn form_record_encodes_only_the_four_scalar_fields() {
    let record = Submission::new("Test", "payload", "0-100", "Fail");
    let encoded = serde_json::to_string(&record).unwrap();
    assert_eq!(
        encoded,
        r#"{"cmd_name":"Test","data":"payload","range":"0-100","status":"Fail"}"#
    );
}

#[test]
fn encoding_is_deterministic() {
    let record = Submission::sample();
    let first = serde_json::to_vec(&record).unwrap();
    let second = serde_json::to_vec(&record).unwrap();
    assert_eq!(first, second);
}

#[test]
fn row_batch_encodes_as_an_array_of_groups() {
    let record = Submission::new("Cell A2", "hello", "lorem ipsum", "Pass");
    let batch = vec![RowGroup::from_submission(&record)];
    let encoded = serde_json::to_string(&batch).unwrap();
    assert_eq!(
        encoded,
        r#"[{"rows":[["cmd_name","Cell A2"],["data","hello"],["range","lorem ipsum"],["status","Pass"]]}]"#
    );
}

#[test]
fn column_table_encodes_parallel_arrays() {
    let mut table = ColumnTable::default();
    assert!(table.is_empty());
    table.push(&Submission::new("A", "d1", "0-10", "Pass"));
    table.push(&Submission::new("B", "d2", "0-20", "Fail"));
    assert_eq!(table.len(), 2);

    let encoded = serde_json::to_string(&table).unwrap();
    assert_eq!(
        encoded,
        r#"{"cmd_name":["A","B"],"data":["d1","d2"],"range":["0-10","0-20"],"status":["Pass","Fail"]}"#
    );
}

#[test]
fn records_survive_a_decode_round_trip() {
    let record = Submission::sample();
    let decoded: Submission =
        serde_json::from_slice(&serde_json::to_vec(&record).unwrap()).unwrap();
    assert_eq!(decoded, record);

    let batch = vec![RowGroup::from_submission(&record)];
    let decoded: Vec<RowGroup> =
        serde_json::from_slice(&serde_json::to_vec(&batch).unwrap()).unwrap();
    assert_eq!(decoded, batch);
}

#[test]
fn absent_list_fields_decode_as_none() {
    let decoded: Submission =
        serde_json::from_str(r#"{"cmd_name":"x","data":"y","range":"z","status":"Pass"}"#).unwrap();
    assert_eq!(decoded.input_other, None);
    assert_eq!(decoded.output_other, None);
}
