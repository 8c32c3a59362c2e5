mod pg_repository_test;
