use bevy::tasks::{IoTaskPool, Task, TaskPool};

/// Spawn `value` on the IO pool and wait for it, so the next `poll_once`
/// on the returned task yields it
pub fn finished_task<T: Send + 'static>(value: T) -> Task<T> {
    let task = IoTaskPool::get_or_init(TaskPool::new).spawn(async move { value });
    while !task.is_finished() {
        std::thread::yield_now();
    }
    task
}
