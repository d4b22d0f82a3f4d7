mod mock_querier;
