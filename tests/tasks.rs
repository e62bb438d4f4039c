#[cfg(test)]
mod tests {
    use tama::libs::task::{Task, TaskList};

    #[test]
    fn test_next_id_on_empty_collection_is_one() {
        let tasks = TaskList::default();
        assert_eq!(tasks.next_id(), 1);
    }

    #[test]
    fn test_next_id_is_one_past_the_maximum() {
        let tasks = TaskList::new(vec![
            Task::new(1, "a"),
            Task::new(3, "b"),
            Task::new(7, "c"),
        ]);
        assert_eq!(tasks.next_id(), 8);
    }

    #[test]
    fn test_deleted_ids_are_never_reused() {
        let mut tasks = TaskList::new(vec![
            Task::new(1, "a"),
            Task::new(3, "b"),
            Task::new(7, "c"),
        ]);
        // id 7 sits at display position 3
        let removed = tasks.remove(3).unwrap();
        assert_eq!(removed.id, 7);
        assert_eq!(tasks.next_id(), 8);

        let id = tasks.add("d");
        assert_eq!(id, 8);
    }

    #[test]
    fn test_add_complete_delete_scenario() {
        let mut tasks = TaskList::default();

        tasks.add("Buy milk");
        assert_eq!(
            tasks.tasks(),
            &[Task { id: 1, title: "Buy milk".into(), completed: false }]
        );

        tasks.add("Walk dog");
        let ids: Vec<u64> = tasks.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let completed = tasks.complete(2).unwrap();
        assert_eq!(completed.id, 2);
        assert!(completed.completed);

        // confirmed deletion of position 1
        tasks.remove(1).unwrap();
        assert_eq!(
            tasks.tasks(),
            &[Task { id: 2, title: "Walk dog".into(), completed: true }]
        );
    }

    #[test]
    fn test_completing_twice_is_idempotent() {
        let mut tasks = TaskList::default();
        tasks.add("once");

        assert!(tasks.complete(1).unwrap().completed);
        assert!(tasks.complete(1).unwrap().completed);
        assert_eq!(tasks.completed_count(), 1);
    }

    #[test]
    fn test_out_of_range_positions_leave_collection_unchanged() {
        let mut tasks = TaskList::default();
        tasks.add("only");
        let snapshot = tasks.clone();

        assert!(tasks.complete(0).is_none());
        assert!(tasks.complete(2).is_none());
        assert!(tasks.remove(0).is_none());
        assert!(tasks.remove(2).is_none());
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn test_positions_are_display_order_not_ids() {
        let mut tasks = TaskList::new(vec![Task::new(5, "five"), Task::new(9, "nine")]);
        let completed = tasks.complete(1).unwrap();
        assert_eq!(completed.id, 5);
        assert_eq!(tasks.get(2).unwrap().id, 9);
    }

    #[test]
    fn test_completed_count_summary_inputs() {
        let mut tasks = TaskList::default();
        tasks.add("a");
        tasks.add("b");
        tasks.add("c");
        tasks.complete(1).unwrap();
        tasks.complete(3).unwrap();

        assert_eq!(tasks.completed_count(), 2);
        assert_eq!(tasks.len(), 3);
    }
}
