pub mod create_project;
pub mod delete_project;
pub mod list_my_projects;
pub mod list_public_projects;
pub mod update_project;

#[cfg(test)]
pub(crate) mod test_support;
