pub fn group_summary_key(group_id: &str) -> String {
    format!("group_summary:{}", group_id)
}
