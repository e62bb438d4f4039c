use crate::libs::task::TaskList;
use crate::libs::view::View;

pub fn cmd(tasks: &TaskList) {
    View::tasks(tasks);
}
